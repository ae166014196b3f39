//! Literal text blocks printed by the session.
use super::command::Scene;
use super::line::{Line, LineKind};

/// The prompt shown in front of the input field and on echoed lines.
pub const PROMPT: &str = "birthday_db> ";

/// Boot lines, printed one per tick.
pub fn boot_script(name: &str) -> Vec<String> {
    vec![
        "INITIALIZING BIRTHDAY DATABASE...".to_string(),
        "LOADING CYBERPUNK PROTOCOLS...".to_string(),
        "SCANNING FOR PARTY MODULES...".to_string(),
        "CONNECTING TO CELEBRATION NETWORK...".to_string(),
        format!("DB://BIRTHDAY_{} READY", name.to_uppercase()),
        String::new(),
        "SYSTEM ONLINE - ENTER LOGIN CREDENTIALS".to_string(),
    ]
}

/// The block appended when the session enters the login phase.
pub fn login_block() -> Vec<Line> {
    vec![
        Line::bare(LineKind::System, ""),
        Line::stamped(LineKind::System, "> IT'S YOUR BIRTHDAY!"),
        Line::stamped(LineKind::System, "> HINT: Try \"help\" to begin"),
        Line::bare(LineKind::Input, PROMPT),
    ]
}

pub const HELP: &[&str] = &[
    "🔧 AVAILABLE SQL COMMANDS:",
    "┌─────────────────────────────────────────┐",
    "│ COMMAND                    │ EFFECT      │",
    "├─────────────────────────────────────────┤",
    "│ SELECT * FROM wishes;      │ Show wishes │",
    "│ SELECT * FROM cake;        │ Spawn cake  │",
    "│ COMMIT;                    │ Final scene │",
    "├─────────────────────────────────────────┤",
    "│ help, clear                │ Utilities   │",
    "└─────────────────────────────────────────┘",
    "💡 Use ↑/↓ arrows for command history",
];

const WISHES: &[&str] = &[
    "┌─────────────────────────────────────────┐",
    "│ WISHES TABLE                            │",
    "├─────────────────────────────────────────┤",
    "│ ID │ WISH                               │",
    "├─────────────────────────────────────────┤",
    "│ 1  │ Happy Birthday!                    │",
    "│ 2  │ May all your dreams come true      │",
    "│ 3  │ Another year of awesome!           │",
    "│ 4  │ Celebrate like there's no tomorrow │",
    "└─────────────────────────────────────────┘",
    "✨ 4 rows returned",
];

const CAKE: &[&str] = &[
    "🎂 SPAWNING MASSIVE VOXEL CAKE...",
    "                🕯️🕯️🕯️",
    "         ┌─────────────────────┐",
    "         │ ░░░░░░░░░░░░░░░░░░░ │",
    "         │ ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓ │",
    "         │ ░░░░░░░░░░░░░░░░░░░ │",
    "         │ ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓ │",
    "         │ ░░░░░░░░░░░░░░░░░░░ │",
    "         └─────────────────────┘",
    "      ┌─────────────────────────────┐",
    "      │ ████████████████████████████ │",
    "      │ ░░░░░░░░░░░░░░░░░░░░░░░░░░░░ │",
    "      │ ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓ │",
    "      │ ░░░░░░░░░░░░░░░░░░░░░░░░░░░░ │",
    "      │ ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓ │",
    "      └─────────────────────────────┘",
    "🔥 Triple candle flame shader activated!",
    "🎉 MEGA CAKE DEPLOYED! Size: ENORMOUS!",
];

const COMMIT_BANNER: &[&str] = &[
    "🚀 COMMITTING BIRTHDAY TRANSACTION...",
    "",
    "██╗  ██╗ █████╗ ██████╗ ██████╗ ██╗   ██╗",
    "██║  ██║██╔══██╗██╔══██╗██╔══██╗╚██╗ ██╔╝",
    "███████║███████║██████╔╝██████╔╝ ╚████╔╝ ",
    "██╔══██║██╔══██║██╔═══╝ ██╔═══╝   ╚██╔╝  ",
    "██║  ██║██║  ██║██║     ██║        ██║   ",
    "╚═╝  ╚═╝╚═╝  ╚═╝╚═╝     ╚═╝        ╚═╝   ",
    "",
    "██████╗ ██╗██████╗ ████████╗██╗  ██╗██████╗  █████╗ ██╗   ██╗",
    "██╔══██╗██║██╔══██╗╚══██╔══╝██║  ██║██╔══██╗██╔══██╗╚██╗ ██╔╝",
    "██████╔╝██║██████╔╝   ██║   ███████║██║  ██║███████║ ╚████╔╝ ",
    "██╔══██╗██║██╔══██╗   ██║   ██╔══██║██║  ██║██╔══██║  ╚██╔╝  ",
    "██████╔╝██║██║  ██║   ██║   ██║  ██║██████╔╝██║  ██║   ██║   ",
    "╚═════╝ ╚═╝╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚═════╝ ╚═╝  ╚═╝   ╚═╝   ",
    "",
];

/// The output block of `scene`, personalised where the scene calls for it.
pub fn render(scene: Scene, name: &str, short_message: &str) -> Vec<String> {
    match scene {
        Scene::Wishes => to_owned(WISHES),
        Scene::Cake => to_owned(CAKE),
        Scene::Commit => {
            let mut lines = to_owned(COMMIT_BANNER);
            lines.push(format!("🎉 {}! 🎉", name.to_uppercase()));
            lines.push(String::new());
            lines.push("🎆 FIREWORKS SEQUENCE INITIATED 🎆".to_string());
            lines.push("💫 BIRTHDAY TRANSACTION COMMITTED SUCCESSFULLY 💫".to_string());
            lines.push(format!("💝 {}", short_message));
            lines
        }
    }
}

fn to_owned(block: &[&str]) -> Vec<String> {
    block.iter().map(|line| line.to_string()).collect()
}
