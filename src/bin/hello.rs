use quill_relay::prelude::*;
use std::path::PathBuf;

struct ScratchView;

impl View for ScratchView {
    fn id(&self) -> ViewId {
        ViewId(1)
    }

    fn bool_setting(&self, name: &str) -> bool {
        name == "wrap"
    }

    fn selection_count(&self) -> usize {
        1
    }

    fn file_path(&self) -> Option<PathBuf> {
        None
    }
}

struct HelloModule;

impl Module for HelloModule {
    fn metadata(&self) -> ModuleMetadata {
        ModuleMetadata::new("hello", "1.0.0")
    }

    fn register(&mut self, hooks: &HookRegistry) -> Result<()> {
        hooks.on_init.register(|| println!("Hello, World!"));
        hooks
            .on_new
            .register(|view| println!("{} created", view.id()));
        Ok(())
    }
}

fn main() -> Result<()> {
    let mut host = RelayHost::build().add_module(HelloModule).build();
    host.init()?;

    let view = ScratchView;
    host.hooks().on_new.fire(&view);

    let verdict = host.hooks().on_query_context.resolve(
        &view,
        "setting.wrap",
        Op::Equal,
        &Operand::Bool(true),
        false,
    );
    println!("setting.wrap -> {:?}", verdict);

    Ok(())
}
