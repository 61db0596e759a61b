use crate::{
    cli::{answers::collect_options, context::GenerationContext, Args},
    config::{fields_for, filters::calculate_sub_folder, Field, APP_FIELDS},
    constants::{APPLICATIONS_DIR, DEFAULT_CONTENT_BUILD_DIR, WORKSPACE_MARKERS},
    dry_run::{
        compute_defaults, configuration_rows, gate_errors, gate_required_fields, is_form_option,
        option_source, print_configuration, print_file_analysis, print_missing_summary,
        print_validation_failure, DryRunMode, Requirements,
    },
    error::{Error, Result},
    prompt::{ask_prompts, compile_prompts, get_prompt_provider, PromptProvider},
    registry::{ensure_unique, update_allowlist, update_registry},
    store::{display_value, ValueStore},
    strategy::{generate_shared_files, select_strategy, write_content_page, Strategy},
    validation::{is_non_interactive_mode, required_fields, validate_all_cli_arguments},
    writer::writer_for,
};
use console::style;
use serde_json::Value;
use std::{
    io::Write,
    path::Path,
};

/// Main CLI runner that orchestrates the entire generation workflow
pub struct Runner<'a> {
    args: Args,
    prompter: &'a dyn PromptProvider,
    out: &'a mut dyn Write,
}

impl<'a> Runner<'a> {
    pub fn new(args: Args, prompter: &'a dyn PromptProvider, out: &'a mut dyn Write) -> Self {
        Self { args, prompter, out }
    }

    /// Executes the complete generation workflow and returns the final store.
    pub fn run(mut self) -> Result<ValueStore> {
        let destination_root = match &self.args.destination {
            Some(destination) => destination.clone(),
            None => std::env::current_dir()?,
        };
        let content_build_root = self
            .args
            .content_build
            .clone()
            .unwrap_or_else(|| destination_root.join(DEFAULT_CONTENT_BUILD_DIR));

        let mut options = collect_options(&self.args)?;
        let mode = DryRunMode::from_options(&options);
        mode.normalize(&mut options);
        log::debug!("Run mode: {mode:?}");

        if !mode.is_active() {
            check_workspace(&destination_root)?;
        }

        let mut store = ValueStore::new();
        store.set_options(options);
        store.set_dry_run(mode.is_active());
        let mut ctx = GenerationContext::new(
            destination_root,
            content_build_root,
            store,
            writer_for(mode.is_active())?,
            mode,
        );

        self.validate(&ctx)?;
        let strategy = self.resolve_values(&mut ctx)?;
        self.configure(&mut ctx, strategy.as_ref());
        self.write_files(&mut ctx, strategy.as_ref())?;
        self.finish(&ctx, strategy.as_ref())?;

        Ok(ctx.into_store())
    }

    /// Rejects invalid or missing options before anything is resolved.
    fn validate(&mut self, ctx: &GenerationContext) -> Result<()> {
        let options = ctx.store().all_options();
        let mode = ctx.mode();

        if mode.is_active() {
            let errors = gate_errors(mode, options);
            if errors.is_empty() {
                return Ok(());
            }
            let is_form = is_form_option(options);
            let fields = fields_for(is_form);
            let required = gate_required_fields(mode, is_form);
            let requirements = Requirements { required: &required, prompted: &[] };
            let rows = configuration_rows(&fields, ctx.store(), mode, &requirements);
            let missing = print_configuration(self.out, &rows)?;
            print_validation_failure(self.out, &errors, &missing)?;
            return Err(Error::ValidationFailed { errors });
        }

        let errors = validate_all_cli_arguments(options);
        if errors.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "{}", style("❌ Validation errors:").red())?;
        for error in &errors {
            writeln!(self.out, "{}", style(format!("  • {error}")).red())?;
        }
        Err(Error::ValidationFailed { errors })
    }

    /// Fills every field from options, prompts and defaults, then picks the strategy.
    fn resolve_values(&mut self, ctx: &mut GenerationContext) -> Result<Box<dyn Strategy>> {
        let interactive =
            !ctx.mode().is_active() && !is_non_interactive_mode(ctx.store().all_options());
        let app_fields: Vec<&'static Field> = APP_FIELDS.iter().collect();

        self.resolve_fields(ctx, &app_fields, interactive)?;
        let is_form = ctx.store().is_truthy("isForm");
        let strategy = select_strategy(is_form);
        log::info!("Using the {} strategy", strategy.name());

        self.resolve_fields(ctx, &strategy.additional_fields(), interactive)?;
        normalize_supplied_values(ctx.store_mut(), &fields_for(is_form));
        Ok(strategy)
    }

    fn resolve_fields(
        &mut self,
        ctx: &mut GenerationContext,
        fields: &[&'static Field],
        interactive: bool,
    ) -> Result<()> {
        if interactive {
            let answers = ask_prompts(
                self.prompter,
                &compile_prompts(fields),
                ctx.store(),
                ctx.destination_root(),
                &mut *self.out,
            )?;
            ctx.store_mut().set_props(answers);
        }
        let destination_root = ctx.destination_root().to_path_buf();
        compute_defaults(ctx.store_mut(), fields, &destination_root);
        Ok(())
    }

    /// Derives the props templates need beyond the fields themselves.
    fn configure(&mut self, ctx: &mut GenerationContext, strategy: &dyn Strategy) {
        let store = ctx.store_mut();
        let folder_name = store.get_str("folderName").unwrap_or_default().to_string();
        store.set_prop("subFolder", Value::String(calculate_sub_folder(&folder_name)));
        strategy.process_prompt_results(store);
        log::debug!("Resolved state: {}", store.state());
    }

    fn write_files(&mut self, ctx: &mut GenerationContext, strategy: &dyn Strategy) -> Result<()> {
        if !ctx.dry_run() {
            ensure_unique(ctx)?;
        }
        let is_new_app = is_new_app(ctx);

        generate_shared_files(ctx)?;
        strategy.generate_files(ctx)?;
        write_content_page(ctx);

        update_registry(ctx)?;
        strategy.update_external_files(ctx);
        if let Some(is_new_app) = is_new_app {
            update_allowlist(ctx, is_new_app);
        }
        Ok(())
    }

    fn finish(&mut self, ctx: &GenerationContext, strategy: &dyn Strategy) -> Result<()> {
        let store = ctx.store();
        let is_form = store.is_truthy("isForm");
        let fields = fields_for(is_form);
        let mode = ctx.mode();

        if !mode.is_active() {
            for field in &fields {
                if let Some(value) = store.get_value(field.name) {
                    log::info!(
                        "{}: {} ({})",
                        field.name,
                        display_value(value),
                        option_source(field.name, mode, store)
                    );
                }
            }
            log::info!("Files created or modified: {}", store.tracked_files().join(", "));
            writeln!(self.out, "{}", strategy.completion_message(store))?;
            return Ok(());
        }

        let required = gate_required_fields(mode, is_form);
        let prompted =
            if mode == DryRunMode::Interactive { required_fields(is_form) } else { Vec::new() };
        let requirements = Requirements { required: &required, prompted: &prompted };
        let rows = configuration_rows(&fields, store, mode, &requirements);
        let missing = print_configuration(self.out, &rows)?;
        if !missing.is_empty() {
            print_missing_summary(self.out, &missing)?;
            return Err(Error::MissingRequiredFields { fields: missing });
        }
        print_file_analysis(self.out, &store.tracked_files())
    }
}

/// Whether the application folder is absent before writing; dry runs never look.
fn is_new_app(ctx: &GenerationContext) -> Option<bool> {
    if ctx.dry_run() {
        return None;
    }
    let folder_name = ctx.store().get_str("folderName").unwrap_or_default();
    Some(!ctx.resolve(APPLICATIONS_DIR).join(folder_name).exists())
}

/// Applies field filters to values supplied on the command line.
fn normalize_supplied_values(store: &mut ValueStore, fields: &[&'static Field]) {
    for field in fields.iter().filter(|field| field.filter.is_some()) {
        let Some(raw) = store.get_option(field.name).and_then(Value::as_str) else {
            continue;
        };
        if store.get_prop(field.name).is_some() {
            continue;
        }
        let filtered = field.apply_filter(raw.to_string());
        if filtered != raw {
            store.set_prop(field.name, Value::String(filtered));
        }
    }
}

/// Real runs must start from a monorepo checkout.
pub fn check_workspace(destination_root: &Path) -> Result<()> {
    for marker in WORKSPACE_MARKERS {
        if !destination_root.join(marker).exists() {
            return Err(Error::UnsupportedWorkspace {
                destination: destination_root.display().to_string(),
                reason: format!("{marker} not found"),
            });
        }
    }
    Ok(())
}

/// Runs with a caller-supplied prompt provider and output sink.
pub fn run_with(args: Args, prompter: &dyn PromptProvider, out: &mut dyn Write) -> Result<ValueStore> {
    Runner::new(args, prompter, out).run()
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let prompter = get_prompt_provider();
    let mut stdout = std::io::stdout();
    run_with(args, &prompter, &mut stdout).map(|_| ())
}
