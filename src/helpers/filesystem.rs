/// A mockable interface to the filesystem
pub trait FilesystemTrait {
    /// Like std::path::Path::is_file()
    fn is_file(&self, path: &str) -> bool;
    /// Like std::fs::read_to_string()
    fn read_to_string(&self, path: &str) -> std::io::Result<String>;
}

pub type Filesystem = Box<dyn FilesystemTrait>;

pub fn real_filesystem() -> Filesystem {
    Box::new(FilesystemImpl)
}

struct FilesystemImpl;

impl FilesystemTrait for FilesystemImpl {
    fn is_file(&self, path: &str) -> bool {
        std::path::Path::new(path).is_file()
    }

    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}
