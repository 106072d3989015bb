use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TENANT: &str = "demo_park";

/// A tenants root in a temporary directory holding one tenant
pub struct TenantTree {
    dir: TempDir,
}

impl TenantTree {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn text_root(&self, lang: &str) -> PathBuf {
        self.root().join(TENANT).join("texts").join(lang)
    }

    pub fn audio_root(&self, lang: &str) -> PathBuf {
        self.root().join(TENANT).join("audio").join(lang)
    }

    pub fn audio_file(&self, lang: &str, monument: &str, mode: &str) -> PathBuf {
        self.audio_root(lang)
            .join(monument)
            .join(format!("{}.mp3", mode))
    }

    pub fn add_text(&self, lang: &str, monument: &str, mode: &str, text: &str) -> Result<PathBuf> {
        let dir = self.text_root(lang).join(monument);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.txt", mode));
        std::fs::write(&path, text)?;
        Ok(path)
    }

    pub fn add_monument_without_text(&self, lang: &str, monument: &str) -> Result<()> {
        std::fs::create_dir_all(self.text_root(lang).join(monument))?;
        Ok(())
    }

    pub fn add_audio(&self, lang: &str, monument: &str, mode: &str, bytes: &[u8]) -> Result<()> {
        let path = self.audio_file(lang, monument, mode);
        std::fs::create_dir_all(path.parent().expect("audio file has a parent"))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// A shell script standing in for `generate-tts`.
///
/// Appends its target argument to `calls.log`, writes a fake MP3 on success and
/// exits with `exit_code`.
#[cfg(unix)]
pub struct FakeClient {
    dir: TempDir,
    pub program: PathBuf,
}

#[cfg(unix)]
impl FakeClient {
    pub fn exiting_with(exit_code: i32) -> Result<Self> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir()?;
        let log = dir.path().join("calls.log");
        let program = dir.path().join("generate-tts");

        let write_audio = if exit_code == 0 {
            "printf 'fake-mp3' > \"$3\"\n"
        } else {
            ""
        };
        let script = format!(
            "#!/bin/sh\necho \"$3\" >> '{}'\n{}exit {}\n",
            log.display(),
            write_audio,
            exit_code
        );
        std::fs::write(&program, script)?;
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755))?;

        Ok(Self { dir, program })
    }

    /// Target paths the client was invoked with, in order
    pub fn calls(&self) -> Vec<PathBuf> {
        std::fs::read_to_string(self.dir.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(PathBuf::from)
            .collect()
    }
}
