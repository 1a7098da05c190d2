use anyhow::Context;
use std::path::PathBuf;
use symedit::{
    init_logging, replay, EditorSettings, Modifiers, Point, ScriptStep, SymbolDocument,
    SymbolEditorContext, SymbolEditorFsm, BUILD_DATE, VERSION,
};

fn load_settings() -> anyhow::Result<EditorSettings> {
    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => match symedit_settings::default_config_path() {
            Ok(path) if path.exists() => path,
            _ => return Ok(EditorSettings::default()),
        },
    };
    EditorSettings::load_from_file(&path)
        .with_context(|| format!("loading settings from {}", path.display()))
}

/// Places a row of pins, rotates the row and removes its first pin.
fn demo_script(grid: i64) -> Vec<ScriptStep> {
    let at = |x: i64, y: i64| Point::from_nm(x * grid, y * grid);
    let mut steps = vec![ScriptStep::StartAddingPins];
    for x in 0..4 {
        steps.push(ScriptStep::Move(at(x * 2, 0)));
        steps.push(ScriptStep::Click(at(x * 2, 0), Modifiers::NONE));
    }
    steps.extend([
        ScriptStep::Abort,
        ScriptStep::Press(at(-2, -2), Modifiers::NONE),
        ScriptStep::Move(at(9, 2)),
        ScriptStep::Release(at(9, 2)),
        ScriptStep::RotateCcw,
        ScriptStep::Click(at(-2, -2), Modifiers::NONE),
        ScriptStep::Click(at(3, -3), Modifiers::NONE),
        ScriptStep::Remove,
        ScriptStep::Undo,
        ScriptStep::Redo,
    ]);
    steps
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("symedit {} (built {})", VERSION, BUILD_DATE);

    let settings = load_settings()?;
    let context = SymbolEditorContext::from_settings(SymbolDocument::default(), &settings);
    let mut fsm = SymbolEditorFsm::new(context);

    let script = demo_script(settings.grid.interval_nm);
    let handled = replay(&mut fsm, &script);
    tracing::info!("{} of {} steps handled", handled, script.len());

    for message in fsm.take_messages() {
        tracing::warn!("{}", message);
    }

    let context = fsm.into_context();
    for pin in context.document.symbol().pins() {
        println!(
            "{}  {:<6} at {}  rotation {}  length {}",
            pin.uuid(),
            pin.name(),
            pin.position(),
            pin.rotation(),
            pin.length()
        );
    }
    println!(
        "{} pins, {} undo steps",
        context.document.symbol().pin_count(),
        context.undo_stack.undo_depth()
    );
    Ok(())
}
