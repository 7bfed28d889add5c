// Changes the working directory of the whole process, so this file holds a single test.

use spinning_cube::resources::{load_binary, load_string};

#[test]
fn should_fall_back_to_build_time_assets_outside_the_crate() {
    let elsewhere = std::env::temp_dir();
    assert!(!elsewhere.join("assets").join("shader.wgsl").exists());
    std::env::set_current_dir(&elsewhere).expect("Failed to leave the crate directory");

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create a tokio runtime");
    let source = runtime
        .block_on(load_string("shader.wgsl"))
        .expect("build.rs copies the shader into the build output");
    assert!(source.contains("fn vs_main"));

    let err = runtime
        .block_on(load_binary("missing.png"))
        .expect_err("no such asset");
    assert!(err.to_string().contains("missing.png"), "{err}");
}
