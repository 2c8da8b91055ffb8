pub struct Icons;

impl Icons {
    pub const MONKEY: &str = "🐒";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const LINK: &str = "🔗";
    pub const STAR: &str = "⭐";
    pub const PERSON: &str = "👤";
    pub const DATABASE: &str = "🗄️";
    pub const LOCK: &str = "🔒";
}
