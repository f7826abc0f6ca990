use std::fs;
use std::path::Path;

const FALLBACK_INDEX: &str = "<!DOCTYPE html>\n<html>\n<head><meta charset=\"UTF-8\"><title>Visual Code Explainer</title></head>\n<body><p>Frontend not built. Run <code>trunk build --release</code> in <code>frontend/</code> and rebuild the server.</p></body>\n</html>\n";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    }

    // include_dir! needs the directory to exist even before the first frontend build
    let embedded = out_dir.join("dist");
    if !embedded.join("index.html").exists() {
        fs::create_dir_all(&embedded).unwrap();
        fs::write(embedded.join("index.html"), FALLBACK_INDEX).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
