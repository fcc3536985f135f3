use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn shopping_dir(workspace_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "Shopping List:\nEggs\nBacon\nApples\nOranges\nMilk\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "Shopping List:\nYogurt\nApples\nOranges\nBananas\nMilk\nTea\n".to_string(),
    ));

    workspace_dir
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    tx.join().unwrap();

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    if let Err(e) = tx.join() {
        eprintln!("Thread error: {}", e);
    }

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn source_dir(workspace_dir: TempDir, file_a: String, file_b: String) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("a").join("main.rs"), file_a));
    write_file(FileSpec::new(workspace_dir.path().join("b").join("main.rs"), file_b));

    workspace_dir
}

#[fixture]
pub fn source_diff_output() -> String {
    " fn main() {\n     let s = String::new();\n     std::io::stdin().read_line(&mut s).unwrap();\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n \n     println!(\"Done\");\n \n     let tx = std::thread::spawn(move || {\n         for i in 0..10 {\n             println!(\"Thread: {}\", i);\n         }\n     });\n \n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n \n     println!(\"All threads completed\");\n }\n"
        .to_string()
}

pub fn run_seqdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("seqdiff").expect("Failed to find seqdiff binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
