use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use userprefs_ui_core::{
    commands::{
        browser::{BrowserOperation, BrowserOutput},
        storage::{StorageOperation, StorageOutput},
    },
    events::{FormEvent, SubmitEvent, ThemeEvent, TimezoneEvent},
    types::{FormControl, Section, Theme},
    App,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Domain event enums, so every variant gets traced
    gen.register_type::<FormEvent>()?;
    gen.register_type::<SubmitEvent>()?;
    gen.register_type::<ThemeEvent>()?;
    gen.register_type::<TimezoneEvent>()?;

    gen.register_type::<Section>()?;
    gen.register_type::<FormControl>()?;
    gen.register_type::<Theme>()?;

    // Shell-side operations and their outputs
    gen.register_type::<StorageOperation>()?;
    gen.register_type::<StorageOutput>()?;
    gen.register_type::<BrowserOperation>()?;
    gen.register_type::<BrowserOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
