pub const SITE_NAME: &str = "Factionboard";
