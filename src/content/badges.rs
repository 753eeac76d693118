use super::{Accent, CertCategory, CompanyKind, CompanyStatus, EmploymentKind, Role, StudyKind};

/// Tailwind classes and icon for a category pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
    pub glow: &'static str,
}

impl Badge {
    const fn tone(label: &'static str, colour: Tone, icon: &'static str) -> Self {
        Self {
            label,
            bg: colour.bg,
            border: colour.border,
            text: colour.text,
            icon,
            glow: colour.glow,
        }
    }

    pub fn pill_classes(&self) -> String {
        format!(
            "inline-flex items-center px-2.5 py-1 rounded-full text-xs font-semibold {} {} border {} shadow-lg {} backdrop-blur-sm transition-all duration-300 hover:scale-110 hover:shadow-xl",
            self.bg, self.border, self.text, self.glow
        )
    }

    pub fn panel_classes(&self) -> String {
        format!(
            "{} {} border rounded-xl p-6 backdrop-blur-sm transition-all duration-300 hover:scale-105 hover:shadow-xl {}",
            self.bg, self.border, self.glow
        )
    }
}

#[derive(Clone, Copy)]
struct Tone {
    bg: &'static str,
    border: &'static str,
    text: &'static str,
    glow: &'static str,
}

// Spelled out in full so the Tailwind scanner sees every class.
const BLUE: Tone = Tone {
    bg: "bg-blue-500/20",
    border: "border-blue-400/50",
    text: "text-blue-300",
    glow: "shadow-blue-500/30",
};
const GREEN: Tone = Tone {
    bg: "bg-green-500/20",
    border: "border-green-400/50",
    text: "text-green-300",
    glow: "shadow-green-500/30",
};
const PURPLE: Tone = Tone {
    bg: "bg-purple-500/20",
    border: "border-purple-400/50",
    text: "text-purple-300",
    glow: "shadow-purple-500/30",
};
const RED: Tone = Tone {
    bg: "bg-red-500/20",
    border: "border-red-400/50",
    text: "text-red-300",
    glow: "shadow-red-500/30",
};
const YELLOW: Tone = Tone {
    bg: "bg-yellow-500/20",
    border: "border-yellow-400/50",
    text: "text-yellow-300",
    glow: "shadow-yellow-500/30",
};
const INDIGO: Tone = Tone {
    bg: "bg-indigo-500/20",
    border: "border-indigo-400/50",
    text: "text-indigo-300",
    glow: "shadow-indigo-500/30",
};
const ORANGE: Tone = Tone {
    bg: "bg-orange-500/20",
    border: "border-orange-400/50",
    text: "text-orange-300",
    glow: "shadow-orange-500/30",
};
const GRAY: Tone = Tone {
    bg: "bg-gray-500/20",
    border: "border-gray-400/50",
    text: "text-gray-300",
    glow: "shadow-gray-500/30",
};

impl CertCategory {
    pub fn badge(&self) -> Badge {
        match self {
            CertCategory::Cloud => Badge::tone("Cloud", BLUE, "☁️"),
            CertCategory::Security => Badge::tone("Security", RED, "🔒"),
            CertCategory::Development => Badge::tone("Development", GREEN, "💻"),
            CertCategory::DevOps => Badge::tone("Devops", PURPLE, "⚙️"),
            CertCategory::Other => Badge::tone("Other", GRAY, "📜"),
        }
    }
}

impl StudyKind {
    pub fn badge(&self) -> Badge {
        match self {
            StudyKind::Degree => Badge::tone("Degree", YELLOW, "🎓"),
            StudyKind::Course => Badge::tone("Course", INDIGO, "📚"),
            StudyKind::Bootcamp => Badge::tone("Bootcamp", ORANGE, "🚀"),
            StudyKind::Other => Badge::tone("Study", GRAY, "📖"),
        }
    }
}

impl EmploymentKind {
    pub fn badge(&self) -> Badge {
        match self {
            EmploymentKind::FullTime => Badge::tone("Full time", GREEN, "💼"),
            EmploymentKind::Contract => Badge::tone("Contract", BLUE, "📋"),
            EmploymentKind::Freelance => Badge::tone("Freelance", PURPLE, "🚀"),
            EmploymentKind::Internship => Badge::tone("Internship", YELLOW, "🎓"),
            EmploymentKind::Other => Badge::tone("Other", GRAY, "💼"),
        }
    }
}

impl Role {
    pub fn badge(&self) -> Badge {
        let label = self.label();
        match self {
            Role::SoftwareEngineer => Badge::tone(label, BLUE, "💻"),
            Role::DevOpsCloud => Badge::tone(label, GREEN, "☁️"),
            Role::Cybersecurity => Badge::tone(label, RED, "🔒"),
            Role::Other => Badge::tone(label, GRAY, "⚡"),
        }
    }
}

impl Accent {
    pub fn badge(&self) -> Badge {
        match self {
            Accent::Blue => Badge::tone("Blue", BLUE, ""),
            Accent::Green => Badge::tone("Green", GREEN, ""),
            Accent::Purple => Badge::tone("Purple", PURPLE, ""),
            Accent::Red => Badge::tone("Red", RED, ""),
            Accent::Yellow => Badge::tone("Yellow", YELLOW, ""),
            Accent::Other => Badge::tone("Gray", GRAY, ""),
        }
    }
}

impl CompanyStatus {
    pub fn classes(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "text-green-400 bg-green-400/20 border-green-400/30",
            CompanyStatus::Acquired => "text-blue-400 bg-blue-400/20 border-blue-400/30",
            CompanyStatus::Sold => "text-purple-400 bg-purple-400/20 border-purple-400/30",
            CompanyStatus::Other => "text-gray-400 bg-gray-400/20 border-gray-400/30",
        }
    }
}

impl CompanyKind {
    pub fn gradient(&self) -> &'static str {
        match self {
            CompanyKind::Current => "from-green-500/20 to-emerald-500/20 border-green-400/30",
            CompanyKind::Startup => "from-blue-500/20 to-cyan-500/20 border-blue-400/30",
            CompanyKind::Other => "from-gray-500/20 to-slate-500/20 border-gray-400/30",
        }
    }
}

/// Colour band of a skill bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBand {
    Expert,
    Advanced,
    Proficient,
    Learning,
}

impl LevelBand {
    pub fn from_level(level: u8) -> Self {
        match level {
            90.. => LevelBand::Expert,
            80..=89 => LevelBand::Advanced,
            70..=79 => LevelBand::Proficient,
            _ => LevelBand::Learning,
        }
    }

    pub fn bar_classes(&self) -> &'static str {
        match self {
            LevelBand::Expert => "bg-gradient-to-r from-green-400 to-green-600",
            LevelBand::Advanced => "bg-gradient-to-r from-blue-400 to-blue-600",
            LevelBand::Proficient => "bg-gradient-to-r from-yellow-400 to-yellow-600",
            LevelBand::Learning => "bg-gradient-to-r from-red-400 to-red-600",
        }
    }
}
