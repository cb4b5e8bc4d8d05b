use std::fs;
use std::path::Path;

// Embeds the latest `trunk build` output when there is one; otherwise the
// checked-in placeholder under static/dist is served.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.join("index.html").exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("cannot create backend/static");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .expect("cannot copy the frontend bundle");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
