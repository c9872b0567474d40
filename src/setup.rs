use std::path::Path;

use clap::ValueEnum;

const REPO_URL: &str = "https://github.com/yourusername/zenOS.git";

/// Platforms with their own setup instructions
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum Platform {
    #[strum(to_string = "Windows")]
    Windows,
    #[strum(to_string = "Linux")]
    Linux,
    #[strum(to_string = "macOS")]
    #[value(name = "macos")]
    MacOs,
    #[strum(to_string = "Termux (Android)")]
    Termux,
    #[strum(to_string = "Unknown")]
    Unknown,
}

impl Platform {
    /// Termux wins over the compile-time OS since it reports as linux
    pub fn detect() -> Self {
        Self::from_parts(
            std::env::var_os("TERMUX_VERSION").is_some(),
            std::env::consts::OS,
        )
    }

    pub fn from_parts(termux: bool, os: &str) -> Self {
        if termux {
            return Platform::Termux;
        }
        match os {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            _ => Platform::Unknown,
        }
    }

    pub fn commands(self) -> SetupCommands {
        let clone = format!("git clone {REPO_URL}");
        let one_liner = format!("{clone} && cd zenOS && python setup.py");
        let (python, prerequisites, tips): (&str, Vec<&str>, [&str; 3]) = match self {
            Platform::Windows => (
                "python",
                vec![
                    "winget install Git.Git",
                    "winget install Python.Python.3.11",
                    "winget install OpenJS.NodeJS",
                ],
                [
                    "Use PowerShell for better Unicode support",
                    "Run as administrator if you get permission errors",
                    "The --unattended flag avoids decision fatigue",
                ],
            ),
            Platform::Linux => (
                "python3",
                vec![
                    "sudo apt update && sudo apt install git python3 python3-pip nodejs",
                    "# Or for other distros:",
                    "# sudo dnf install git python3 python3-pip nodejs  # Fedora",
                    "# sudo pacman -S git python python-pip nodejs     # Arch",
                ],
                [
                    "Use tab completion for commands",
                    "The setup system handles all the decisions",
                    "Clear progress indicators show what's happening",
                ],
            ),
            Platform::MacOs => (
                "python3",
                vec![
                    "brew install git python node",
                    "# If you don't have Homebrew:",
                    "# /bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"",
                ],
                [
                    "Homebrew handles all the complexity",
                    "The setup system is predictable and reliable",
                    "No need to remember complex commands",
                ],
            ),
            Platform::Termux => (
                "python",
                vec!["pkg update && pkg upgrade", "pkg install git python nodejs"],
                [
                    "Perfect for coding on the go",
                    "The setup system works great on mobile",
                    "No need to remember complex mobile commands",
                ],
            ),
            Platform::Unknown => (
                "python",
                vec![
                    "Install Git, Python 3.7+, and Node.js (optional)",
                    "See DEV_ENVIRONMENT_SETUP.md for details",
                ],
                [
                    "The setup system adapts to your environment",
                    "One command handles everything",
                    "Clear error messages if something goes wrong",
                ],
            ),
        };

        let one_liner = if self == Platform::Termux {
            format!("pkg update && pkg upgrade && pkg install git python nodejs && {one_liner}")
        } else {
            one_liner
        };

        SetupCommands {
            platform: self,
            one_liner,
            prerequisites: prerequisites.into_iter().map(String::from).collect(),
            setup: vec![
                clone,
                "cd zenOS".to_string(),
                format!("{python} setup.py --unattended"),
            ],
            validation: format!("{python} setup.py --validate-only"),
            tips: tips.into_iter().map(String::from).collect(),
        }
    }
}

/// Everything printed for one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupCommands {
    pub platform: Platform,
    pub one_liner: String,
    pub prerequisites: Vec<String>,
    pub setup: Vec<String>,
    pub validation: String,
    pub tips: Vec<String>,
}

impl SetupCommands {
    pub fn render(&self) -> String {
        let mut out = format!("\n🧠 Setup Commands for {}\n{}\n", self.platform, "=".repeat(50));

        out.push_str(&format!("\n📋 One-Command Setup:\n   {}\n", self.one_liner));

        out.push_str("\n🔧 Prerequisites (if not installed):\n");
        for cmd in &self.prerequisites {
            out.push_str(&format!("   {cmd}\n"));
        }

        out.push_str("\n⚙️  Manual Setup Steps:\n");
        for (i, cmd) in self.setup.iter().enumerate() {
            out.push_str(&format!("   {}. {cmd}\n", i + 1));
        }

        out.push_str(&format!("\n✅ Validation:\n   {}\n", self.validation));

        if !self.tips.is_empty() {
            out.push_str("\n🧠 Neuro-Spicy Tips:\n");
            for tip in &self.tips {
                out.push_str(&format!("   • {tip}\n"));
            }
        }

        out.push_str("\n📚 Full Guide: DEV_ENVIRONMENT_SETUP.md\n");
        out.push_str("📋 Cheat Sheet: DEV_SETUP_CHEAT_SHEET.md\n");
        out
    }
}

pub fn banner() -> String {
    format!(
        "🧠 Neuro-Spicy Dev Environment Setup\n{}\nTurning environment setup bugs into features\n",
        "=".repeat(40)
    )
}

/// Closing hint, depending on whether the project is already checked out in `dir`
pub fn checkout_hint(dir: &Path) -> String {
    if dir.join("setup.py").exists() {
        "\n🎉 zenOS detected in current directory!\n   Run: python setup.py --validate-only\n   Or:  python setup.py --unattended\n".to_string()
    } else {
        "\n💡 Tip: Run the one-command setup above to get started!\n   This will handle all the complexity for you!\n".to_string()
    }
}
