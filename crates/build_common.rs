// README rendering shared by every campmon build script.
//
// Each crate's lib.rs includes OUT_DIR/README_GENERATED.md as its crate docs.
// Pull this file in with `include!("../build_common.rs");` after importing
// `std::env`, `std::fs` and `std::path::Path`.

/// Write `README_GENERATED.md` into `OUT_DIR` from the crate's README.
///
/// Source-file links (`src/foo.rs`) become module links (`foo`), and links
/// to the workspace README point at the repository URL from the root
/// manifest. A crate without a README gets no generated file.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let crate_root = Path::new(crate_dir);
    let Ok(readme) = fs::read_to_string(crate_root.join("README.md")) else {
        return;
    };

    let doc = rustdoc_links(&readme, workspace_repository(crate_root).as_deref());

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), doc).unwrap();
}

/// Rewrite README links so they resolve inside rustdoc.
fn rustdoc_links(readme: &str, repository: Option<&str>) -> String {
    let doc = readme.replace("](src/", "](").replace(".rs)", ")");
    match repository {
        Some(url) => doc.replace("](../../README.md", &format!("]({url}")),
        None => doc,
    }
}

/// `repository` value of the workspace manifest two levels above the crate.
fn workspace_repository(crate_root: &Path) -> Option<String> {
    let manifest = crate_root.parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(manifest).ok()?;

    content.lines().find_map(|line| {
        let (key, value) = line.split_once('=')?;
        if key.trim() != "repository" {
            return None;
        }
        let value = value.trim();
        value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .map(str::to_string)
    })
}
