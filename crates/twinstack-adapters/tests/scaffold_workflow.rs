//! End-to-end bootstrap runs through the service with real and in-memory adapters.

use std::path::Path;

use twinstack_adapters::{LocalFilesystem, MemoryFilesystem, RecordingProcessRunner};
use twinstack_core::{
    application::ApplicationError,
    prelude::*,
};

fn service_on_disk(runner: &RecordingProcessRunner) -> FullstackService {
    FullstackService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(runner.clone()),
        Toolchain::default(),
    )
}

fn read_manifest(root: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(root.join("package.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn myapp_on_empty_directory() {
    let cwd = tempfile::tempdir().unwrap();
    let runner = RecordingProcessRunner::new();
    let layout = ProjectLayout::resolve(cwd.path(), "myapp").unwrap();

    service_on_disk(&runner)
        .scaffold(&layout, &NoopObserver)
        .unwrap();

    let root = cwd.path().join("myapp");
    let manifest = read_manifest(&root);
    assert_eq!(
        manifest,
        serde_json::json!({"name": "myapp", "version": "0.1.0", "private": true})
    );
    assert!(root.join("api").is_dir());
    assert_eq!(
        runner.command_lines(),
        [
            "npm install --save create-react-app",
            "create-react-app myapp-client"
        ]
    );
    // both tools run inside the project root
    assert!(runner.calls().iter().all(|(_, dir)| dir == &root));
}

#[test]
fn nested_path_uses_basename_for_manifest() {
    let cwd = tempfile::tempdir().unwrap();
    let runner = RecordingProcessRunner::new();
    let layout = ProjectLayout::resolve(cwd.path(), "./nested/myapp").unwrap();

    service_on_disk(&runner)
        .scaffold(&layout, &NoopObserver)
        .unwrap();

    let root = cwd.path().join("nested").join("myapp");
    assert_eq!(read_manifest(&root)["name"], "myapp");
    assert!(root.join("api").is_dir());
    assert_eq!(runner.command_lines()[1], "create-react-app myapp-client");
}

#[test]
fn rerun_over_existing_directories_succeeds() {
    let cwd = tempfile::tempdir().unwrap();
    let root = cwd.path().join("myapp");
    std::fs::create_dir_all(root.join("api")).unwrap();

    let runner = RecordingProcessRunner::new();
    let layout = ProjectLayout::resolve(cwd.path(), "myapp").unwrap();
    service_on_disk(&runner)
        .scaffold(&layout, &NoopObserver)
        .unwrap();

    assert!(root.join("package.json").is_file());
    assert!(root.join("api").is_dir());
}

#[test]
fn install_failure_stops_the_sequence() {
    let cwd = tempfile::tempdir().unwrap();
    let runner = RecordingProcessRunner::new().exit_with("npm", 1);
    let layout = ProjectLayout::resolve(cwd.path(), "myapp").unwrap();

    let err = service_on_disk(&runner)
        .scaffold(&layout, &NoopObserver)
        .unwrap_err();

    assert_eq!(
        err,
        ScaffoldError::Application(ApplicationError::ProcessFailed {
            command: "npm install --save create-react-app".into(),
            code: Some(1),
        })
    );
    assert_eq!(runner.command_lines().len(), 1);
    let root = cwd.path().join("myapp");
    assert!(!root.join("myapp-client").exists());
    assert!(!root.join("api").exists());
    // the manifest was already written before the install
    assert!(root.join("package.json").is_file());
}

#[test]
fn generator_failure_leaves_no_api_directory() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingProcessRunner::new().exit_with("create-react-app", 2);
    let service = FullstackService::new(
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        Toolchain::default(),
    );
    let layout = ProjectLayout::resolve(Path::new("/work"), "shop").unwrap();

    assert!(service.scaffold(&layout, &NoopObserver).is_err());
    assert_eq!(runner.command_lines().len(), 2);
    assert!(fs.exists(layout.root()));
    assert!(!fs.exists(&layout.api_dir()));
}

#[test]
fn api_directory_failure_is_reported() {
    let fs = MemoryFilesystem::new();
    let layout = ProjectLayout::resolve(Path::new("/work"), "shop").unwrap();
    fs.deny_writes_under(layout.api_dir());

    let service = FullstackService::new(
        Box::new(fs.clone()),
        Box::new(RecordingProcessRunner::new()),
        Toolchain::default(),
    );
    let err = service.scaffold(&layout, &NoopObserver).unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Application(ApplicationError::FilesystemError { .. })
    ));
    assert_eq!(
        fs.list_files(),
        [layout.manifest_path()],
        "manifest is the only file written"
    );
}

#[test]
fn configured_toolchain_drives_both_commands() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingProcessRunner::new();
    let toolchain = Toolchain::new("yarn", "create-next-app", "create-next-app").unwrap();
    let service = FullstackService::new(Box::new(fs), Box::new(runner.clone()), toolchain);
    let layout = ProjectLayout::resolve(Path::new("/work"), "blog").unwrap();

    let report = service.scaffold(&layout, &NoopObserver).unwrap();

    assert_eq!(
        runner.command_lines(),
        [
            "yarn install --save create-next-app",
            "create-next-app blog-client"
        ]
    );
    assert_eq!(report.client_command, runner.calls()[1].0);
}

#[test]
fn root_exists_reflects_earlier_runs() {
    let fs = MemoryFilesystem::new();
    let service = FullstackService::new(
        Box::new(fs.clone()),
        Box::new(RecordingProcessRunner::new()),
        Toolchain::default(),
    );
    let layout = ProjectLayout::resolve(Path::new("/work"), "shop").unwrap();

    assert!(!service.root_exists(&layout));
    service.scaffold(&layout, &NoopObserver).unwrap();
    assert!(service.root_exists(&layout));
}
