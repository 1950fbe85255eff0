use super::pager::Output;
use super::render::{print_messages, render_id_list, render_note};
use super::setup::{Cli, Commands};
use clap::Parser;
use gonzo::api::GonzoApi;
use gonzo::config::{Environment, GonzoConfig};
use gonzo::editor::{edit_content, EditorCommand};
use gonzo::error::Result;
use gonzo::listing::Selection;
use gonzo::source::NoteSource;
use gonzo::store::fs::FileStore;
use log::{debug, LevelFilter};

struct AppContext {
    api: GonzoApi<FileStore>,
    config: GonzoConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::New { editor, text }) => handle_new(&mut ctx, editor, text),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Read { from, reverse, cat }) => handle_read(&ctx, from, reverse, cat),
        Some(Commands::Edit { id }) => handle_edit(&mut ctx, id),
        Some(Commands::List {
            from,
            reverse,
            head,
            tail,
        }) => handle_list(
            &ctx,
            Selection {
                reverse,
                from,
                head,
                tail,
            },
        ),
        None => handle_list(&ctx, Selection::default()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("GONZO_LOG")
        .format_timestamp(None)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let env = Environment::capture();
    let config = GonzoConfig::load(&env)?;
    debug!(
        "storage root {}, editor {:?}, pager {:?}",
        config.root.display(),
        config.editor,
        config.pager
    );

    let api = GonzoApi::new(FileStore::new(config.root.clone()));
    Ok(AppContext { api, config })
}

fn handle_new(ctx: &mut AppContext, use_editor: bool, text: Vec<String>) -> Result<()> {
    let editor = EditorCommand::parse(&ctx.config.editor)?;
    let source = NoteSource::from_args(&text, use_editor);
    let note = source.resolve(std::io::stdin().lock(), &editor)?;

    let result = ctx.api.create_note(note)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_notes(&ids)?;
    print_messages(&result.messages);
    result.into_result()?;
    Ok(())
}

fn handle_read(ctx: &AppContext, from: Option<String>, reverse: bool, cat: bool) -> Result<()> {
    let selection = Selection {
        reverse,
        from,
        ..Default::default()
    };
    let result = ctx.api.read_notes(&selection)?;

    let pager = if cat { None } else { ctx.config.pager.as_deref() };
    let mut out = Output::open(pager)?;
    for note in &result.notes {
        out.write_str(&render_note(note.id.as_str(), &note.content))?;
    }
    out.finish()
}

fn handle_edit(ctx: &mut AppContext, id: Option<String>) -> Result<()> {
    let editor = EditorCommand::parse(&ctx.config.editor)?;
    let result = ctx
        .api
        .edit_note(id.as_deref(), |current| edit_content(current, &editor))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, selection: Selection) -> Result<()> {
    let result = ctx.api.list_notes(&selection)?;
    let mut out = Output::open(None)?;
    out.write_str(&render_id_list(&result.listed_ids))?;
    out.finish()
}
