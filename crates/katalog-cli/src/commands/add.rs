//! Implementation of the `katalog add` command.
//!
//! Responsibility: collect field values (flags or prompts), hand the form to
//! the submission service, and report the outcome. No product rules live
//! here.

use tracing::{debug, info, instrument};

use katalog_core::{
    application::{Submission, SubmissionService},
    domain::{Product, ProductField, ProductForm},
};

use crate::{
    cli::{AddArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `katalog add` command.
///
/// 1. Open a form (the product id is assigned before any field is read)
/// 2. Fill it from flags, or from prompts with `--interactive`
/// 3. `--dry-run`: validate only
/// 4. Submit; every failing field is reported at once
#[instrument(skip_all)]
pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = SubmissionService::new(
        super::product_store(&global, &config),
        super::id_generator(&config),
    );

    // 1. Open form
    let mut form = service
        .open_form()
        .with_cli_context(|| "opening product form")?;
    debug!(product_id = %form.product_id(), "Form opened");
    output.info(&format!("Product id: {}", form.product_id()))?;

    // 2. Fill
    if args.interactive {
        prompt_fields(&mut form, &output)?;
    } else {
        let draft = args.to_draft();
        for field in ProductField::ALL {
            form.set(field, draft.get(field));
        }
    }

    // 3. Dry run: validate but do not write.
    if args.dry_run {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(CliError::ValidationRejected { errors });
        }
        output.success("Dry run: product is valid, nothing was saved")?;
        return Ok(());
    }

    // 4. Submit
    match service.submit(form).with_cli_context(|| "saving product")? {
        Submission::Accepted(product) => {
            info!(product_id = %product.product_id(), "Product added");
            report_saved(&product, &output)
        }
        Submission::Rejected(errors) => Err(CliError::ValidationRejected { errors }),
    }
}

fn report_saved(product: &Product, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(product)?;
        return Ok(());
    }

    output.success(&format!(
        "Saved '{}' as {}",
        product.product_name(),
        product.product_id()
    ))?;
    output.print(&format!("  {}", output.pricing_line(&product.pricing())))?;
    Ok(())
}

/// Prompt for every field, then re-prompt only the ones that fail until the
/// draft validates or the user gives up.
#[cfg(feature = "interactive")]
fn prompt_fields(form: &mut ProductForm, output: &OutputManager) -> CliResult<()> {
    use dialoguer::{Confirm, Input};

    let prompt_error = |e: dialoguer::Error| CliError::InvalidInput {
        message: "failed to read input".into(),
        source: Some(Box::new(e)),
    };

    let mut pending: Vec<ProductField> = ProductField::ALL.to_vec();
    loop {
        for field in &pending {
            let prompt = if field.is_required() {
                field.label().to_string()
            } else {
                format!("{} (optional)", field.label())
            };
            let value: String = Input::new()
                .with_prompt(prompt)
                .with_initial_text(form.draft().get(*field))
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_error)?;
            form.set(*field, value);
        }

        let errors = form.validate();
        if errors.is_empty() {
            return Ok(());
        }

        for (field, message) in errors.iter() {
            output.error(&format!("{}: {}", field.label(), message))?;
        }

        let retry = Confirm::new()
            .with_prompt("Fix these fields?")
            .default(true)
            .interact()
            .map_err(prompt_error)?;
        if !retry {
            return Err(CliError::Cancelled);
        }
        pending = errors.fields().collect();
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_fields(_form: &mut ProductForm, _output: &OutputManager) -> CliResult<()> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
