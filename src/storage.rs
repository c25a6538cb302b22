use std::sync::OnceLock;
use thiserror::Error;

#[cfg(not(feature = "web"))]
use std::path::Path;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser storage unavailable: {0}")]
    BrowserStorage(String),

    #[cfg(target_os = "android")]
    #[error("JNI Error: {0}")]
    Jni(#[from] jni::errors::Error),

    #[error("{0}")]
    Other(String),
}

static STORAGE_DIR_OVERRIDE: OnceLock<String> = OnceLock::new();

/// Use `dir` instead of the platform default. Only the first call wins.
pub fn set_storage_dir_override(dir: impl Into<String>) {
    let dir = dir.into();
    if STORAGE_DIR_OVERRIDE.set(dir.clone()).is_err() {
        log::warn!("⚠️ Storage directory already configured, ignoring {}", dir);
    }
}

// Android-specific function to get the proper files directory
#[cfg(target_os = "android")]
fn get_android_files_dir() -> Result<String, StorageError> {
    use dioxus::mobile::wry::prelude::dispatch;
    use jni::objects::{JObject, JString};
    use jni::JNIEnv;

    let (tx, rx) = std::sync::mpsc::channel();

    fn run(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<String, StorageError> {
        let files_dir = env
            .call_method(activity, "getFilesDir", "()Ljava/io/File;", &[])?
            .l()?;

        let files_dir_path: JString<'_> = env
            .call_method(files_dir, "getAbsolutePath", "()Ljava/lang/String;", &[])?
            .l()?
            .into();

        let files_dir_str: String = env.get_string(&files_dir_path)?.into();
        Ok(files_dir_str)
    }

    dispatch(move |env, activity, _webview| {
        let _ = tx.send(run(env, activity));
    });

    match rx.recv() {
        Ok(result) => result,
        Err(e) => Err(StorageError::Other(format!("Channel receive error: {}", e))),
    }
}

#[cfg(target_os = "android")]
fn get_android_files_dir_cached() -> &'static Option<String> {
    static ANDROID_FILES_DIR: OnceLock<Option<String>> = OnceLock::new();
    ANDROID_FILES_DIR.get_or_init(|| match get_android_files_dir() {
        Ok(dir) => {
            log::info!("✅ Android files directory initialized: {}", dir);
            Some(dir)
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Android files directory: {}", e);
            None
        }
    })
}

// Get the appropriate storage directory for the current platform
pub fn get_storage_dir() -> String {
    if let Some(dir) = STORAGE_DIR_OVERRIDE.get() {
        return dir.clone();
    }

    #[cfg(target_os = "android")]
    {
        if let Some(ref dir) = *get_android_files_dir_cached() {
            dir.clone()
        } else {
            log::warn!("⚠️ Using fallback storage directory");
            "/data/data/com.expenseclient.app/files".to_string()
        }
    }
    #[cfg(not(target_os = "android"))]
    {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        format!("{home_dir}/.expense_client")
    }
}

fn document_path(name: &str) -> String {
    format!("{}/{name}.json", get_storage_dir())
}

// Ensure storage directory exists with logging
#[cfg(not(feature = "web"))]
fn ensure_storage_dir() -> Result<(), StorageError> {
    let storage_dir = get_storage_dir();
    log::debug!("Ensuring storage directory exists: {}", storage_dir);

    std::fs::create_dir_all(&storage_dir).map_err(|e| {
        log::error!("❌ Failed to create storage directory {}: {}", storage_dir, e);
        e
    })?;

    let test_file = format!("{}/permission_test.txt", storage_dir);
    match std::fs::write(&test_file, "permission_test") {
        Ok(_) => {
            let _ = std::fs::remove_file(&test_file);
            Ok(())
        }
        Err(e) => {
            log::error!("❌ Storage directory exists but is not writable: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(feature = "web")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window()
        .ok_or_else(|| StorageError::BrowserStorage("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::BrowserStorage(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::BrowserStorage("localStorage disabled".to_string()))
}

/// Read a stored document, `None` when it was never written
pub fn read_document(name: &str) -> Result<Option<String>, StorageError> {
    #[cfg(feature = "web")]
    {
        let storage = local_storage()?;
        storage
            .get_item(name)
            .map_err(|e| StorageError::BrowserStorage(format!("{:?}", e)))
    }

    #[cfg(not(feature = "web"))]
    {
        let path = document_path(name);
        if !Path::new(&path).exists() {
            log::debug!("ℹ️ Document doesn't exist yet: {}", path);
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        log::debug!("📄 Read {} bytes from {}", data.len(), path);
        Ok(Some(data))
    }
}

pub fn write_document(name: &str, contents: &str) -> Result<(), StorageError> {
    #[cfg(feature = "web")]
    {
        let storage = local_storage()?;
        storage
            .set_item(name, contents)
            .map_err(|e| StorageError::BrowserStorage(format!("{:?}", e)))?;
        log::info!("✅ {} saved to web storage", name);
        Ok(())
    }

    #[cfg(not(feature = "web"))]
    {
        ensure_storage_dir()?;
        let path = document_path(name);
        std::fs::write(&path, contents)?;
        log::info!("✅ {} saved to: {}", name, path);
        Ok(())
    }
}

pub fn remove_document(name: &str) -> Result<(), StorageError> {
    #[cfg(feature = "web")]
    {
        let storage = local_storage()?;
        storage
            .remove_item(name)
            .map_err(|e| StorageError::BrowserStorage(format!("{:?}", e)))
    }

    #[cfg(not(feature = "web"))]
    {
        let path = document_path(name);
        match std::fs::remove_file(&path) {
            Ok(_) => {
                log::info!("✅ {} removed", path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Named-document persistence behind the client state
pub trait DocumentStorage {
    fn read(&self, name: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError>;
    fn remove(&self, name: &str) -> Result<(), StorageError>;
}

/// Files on native builds, `localStorage` on web
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformStorage;

impl DocumentStorage for PlatformStorage {
    fn read(&self, name: &str) -> Result<Option<String>, StorageError> {
        read_document(name)
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        write_document(name, contents)
    }

    fn remove(&self, name: &str) -> Result<(), StorageError> {
        remove_document(name)
    }
}

/// Points storage at a per-process temp directory for tests
#[cfg(test)]
pub(crate) fn use_test_storage_dir() {
    let dir = std::env::temp_dir().join(format!("expense_client_storage_{}", std::process::id()));
    let _ = STORAGE_DIR_OVERRIDE.set(dir.to_string_lossy().into_owned());
}
