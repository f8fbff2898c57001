use simple_os::repl::run_script;
use simple_os::{Shell, ShellOptions};

fn shell() -> Shell {
    Shell::new(ShellOptions::default()).unwrap()
}

#[test]
fn create_enter_write_and_read_back() {
    let mut sh = shell();
    for line in ["mkdir docs", "cd docs", "touch a.txt", "write a.txt hello world"] {
        sh.submit(line).unwrap();
    }
    assert_eq!(sh.submit("cat a.txt").unwrap(), "hello world");
    assert_eq!(sh.cwd(), "/docs");
}

#[test]
fn cd_to_missing_directory_keeps_path() {
    let mut sh = shell();
    assert_eq!(sh.submit("cd nowhere").unwrap(), "cd: nowhere: No such directory");
    assert_eq!(sh.cwd(), "/");
}

#[test]
fn unknown_command_is_reported() {
    let mut sh = shell();
    assert_eq!(sh.submit("foo").unwrap(), "Command not found: foo");
}

#[test]
fn cd_up_from_root_stays_at_root() {
    let mut sh = shell();
    sh.submit("cd ..").unwrap();
    assert_eq!(sh.cwd(), "/");
}

#[test]
fn ls_of_fresh_directory_is_empty() {
    let mut sh = shell();
    sh.submit("mkdir empty").unwrap();
    sh.submit("cd empty").unwrap();
    assert_eq!(sh.submit("ls").unwrap(), "");
}

#[test]
fn mkdir_twice_keeps_one_child() {
    let mut sh = shell();
    assert_eq!(sh.submit("mkdir x").unwrap(), "");
    assert_eq!(sh.submit("mkdir x").unwrap(), "mkdir: x: Directory already exists");
    assert_eq!(sh.submit("ls").unwrap(), "📁 home\n📁 x");
}

#[test]
fn edit_and_save_unchanged_is_idempotent() {
    let mut sh = shell();
    sh.submit("cd home").unwrap();
    let before = sh.submit("cat welcome.txt").unwrap();
    sh.submit("edit welcome.txt").unwrap();
    sh.save_edit().unwrap();
    assert_eq!(sh.submit("cat welcome.txt").unwrap(), before);
}

#[test]
fn missing_arguments_print_usage_without_side_effects() {
    let mut sh = shell();
    let nodes = sh.fs().len();
    assert_eq!(sh.submit("cat").unwrap(), "Usage: cat <filename>");
    assert_eq!(sh.submit("mkdir").unwrap(), "Usage: mkdir <dirname>");
    assert_eq!(sh.submit("touch").unwrap(), "Usage: touch <filename>");
    assert_eq!(sh.submit("edit").unwrap(), "Usage: edit <filename>");
    assert_eq!(sh.submit("write only-name").unwrap(), "Usage: write <filename> <content>");
    assert_eq!(sh.fs().len(), nodes);
    assert!(!sh.is_editing());
}

#[test]
fn stale_path_segments_resolve_to_closest_ancestor() {
    let mut sh = Shell::new(ShellOptions::default()).unwrap();
    sh.submit("cd home").unwrap();
    let home = sh.fs().resolve("/home");
    assert_eq!(sh.fs().resolve("/home/gone/deeper"), home);
    assert_eq!(sh.state().current_dir(), home);
}

#[test]
fn script_runner_matches_interactive_semantics() {
    let mut sh = shell();
    let outputs = run_script(&mut sh, "touch f\nwrite f a  b\ncat f\nps").unwrap();
    assert_eq!(outputs[1], "Written 4 bytes to f");
    assert_eq!(outputs[2], "a  b");
    assert!(outputs[3].starts_with("PID\tNAME"));
}

#[test]
fn help_is_static() {
    let mut sh = shell();
    let first = sh.submit("help").unwrap();
    sh.submit("mkdir x").unwrap();
    assert_eq!(sh.submit("help").unwrap(), first);
    assert!(first.contains("  write <file> <content> - Write content to file"));
}
