use std::fs;

pub fn settings_export() {
    print!("{}", race_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        race_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: rules.max_hearts={}, segments.max_difficulty={}, junk.alphabet={} chars",
        s.rules.max_hearts,
        s.segments.max_difficulty,
        s.junk.alphabet.chars().count()
    );
}

pub fn passages_export() {
    print!("{}", race_core::segment::DEFAULT_PASSAGES_TOML);
}

pub fn passages_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let p = die!(race_core::segment::parse_passages_toml(&content), "Error: {}");
    println!(
        "OK: easy={}, medium={}, hard={}",
        p.easy.len(),
        p.medium.len(),
        p.hard.len()
    );
}

/// Install a custom settings file before anything reads the global settings.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(race_core::settings::init_custom(content), "Error: {}");
}
