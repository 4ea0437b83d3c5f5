use {
    crate::{
        command_line::{
            arguments::{Arguments, Command},
            files,
        },
        extracting::Instance,
        syntax_tree::{xml::Document, Node as _},
        translating::{render, translate},
    },
    anyhow::{Context, Result},
    clap::Parser as _,
    simplelog::{ColorChoice, Config, TermLogger, TerminalMode},
    std::path::PathBuf,
};

fn read_instance(input: Option<PathBuf>) -> Result<Instance> {
    let document = input.map_or_else(Document::from_stdin, Document::from_file)?;
    Ok(Instance::from(&document))
}

fn convert(instance: &Instance, raw: bool) -> Result<String> {
    let formula = if raw {
        render(&instance.relations)?
    } else {
        translate(&instance.relations)?
    };
    Ok(formula)
}

pub fn main() -> Result<()> {
    let arguments = Arguments::parse();

    TermLogger::init(
        arguments.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("could not initialize logging")?;

    match arguments.command {
        Command::Render { raw, inputs } => {
            if inputs.is_empty() {
                let instance = read_instance(None)?;
                let formula = convert(&instance, raw)
                    .context("could not reconstruct the formula from stdin")?;
                println!("{formula}");
                return Ok(());
            }

            let files = files::collect(inputs).context("unable to collect the instance files")?;
            for file in files {
                log::info!("reconstructing the formula of `{}`", file.display());
                let instance = read_instance(Some(file.clone()))?;
                let formula = convert(&instance, raw).with_context(|| {
                    format!("could not reconstruct the formula of `{}`", file.display())
                })?;
                println!("{formula}");
            }

            Ok(())
        }

        Command::Atoms { input } => {
            let instance = read_instance(input)?;
            for atom in &instance.atoms {
                println!("{atom}");
            }

            Ok(())
        }
    }
}
