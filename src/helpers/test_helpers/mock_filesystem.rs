use super::*;

#[derive(Debug, Default)]
struct MockFilesystemInner {
    files: HashMap<String, String>,
}

/// In-memory files for config tests
#[derive(Debug, Clone, Default)]
pub struct MockFilesystem(Arc<Mutex<MockFilesystemInner>>);

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(self, path: &str, contents: &str) -> Self {
        self.0
            .lock()
            .unwrap()
            .files
            .insert(path.to_string(), contents.to_string());
        self
    }
}

impl FilesystemTrait for MockFilesystem {
    fn is_file(&self, path: &str) -> bool {
        self.0.lock().unwrap().files.contains_key(path)
    }

    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        match self.0.lock().unwrap().files.get(path) {
            Some(contents) => Ok(contents.clone()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path),
            )),
        }
    }
}
