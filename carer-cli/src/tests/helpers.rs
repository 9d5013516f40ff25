//! Test helpers for laying out carer files in a temporary workspace.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const SAMPLE_CARERS: &str = "\
id,first_name,last_name,num_reviews,avg_review,img_problems,type,num_previous_clients,days_since_login,age,years_experience
10,Ana,Lopez,4,3.9,2,advanced,2,5,31,6
11,Ben,Ortiz,0,,0,basic,0,1,22,1
12,Cara,Holt,8,4.6,0,expert,7,0,47,20
";

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent.as_std_path()).expect("create parent directories");
    }
    fs::write(path.as_std_path(), contents).expect("write file");
}
