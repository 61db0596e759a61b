//! Splices literal entries into array and object literals of shared source files.
//!
//! Every patch is best effort: failures are logged and never abort the run.

use crate::{
    cli::context::GenerationContext,
    constants::{FORMS_CONFIG_VALIDATOR_FILE, PLATFORM_CONSTANTS_FILE},
    error::Result,
};
use regex::Regex;

/// A section of a shared file and the entry a new form adds to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantPatch {
    pub file: &'static str,
    pub section: &'static str,
    /// Three capture groups: opening marker, existing body, closing marker.
    pub pattern: &'static str,
    pub entry: String,
}

/// Inserts `entry` before the closing marker of the first match.
///
/// Trailing whitespace of the existing body is trimmed and the entry goes
/// on its own line. A body that already contains the entry is left alone.
pub fn splice_entry(content: &str, pattern: &Regex, entry: &str) -> String {
    pattern
        .replacen(content, 1, |caps: &regex::Captures<'_>| {
            let start = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            let end = caps.get(3).map_or("", |m| m.as_str());
            if body.contains(entry) {
                format!("{start}{body}{end}")
            } else {
                format!("{start}{}\n{entry}\n{end}", body.trim_end())
            }
        })
        .into_owned()
}

fn try_patch(ctx: &mut GenerationContext, patch: &ConstantPatch) -> Result<()> {
    let target = ctx.resolve(patch.file);
    if ctx.dry_run() {
        ctx.track_patch(target, patch.section);
        return Ok(());
    }

    let pattern = Regex::new(patch.pattern)?;
    let Some(content) = ctx.read_to_string(&target)? else {
        log::warn!("Could not update {}: {} does not exist", patch.section, target.display());
        return Ok(());
    };
    if !pattern.is_match(&content) {
        log::warn!("Could not find {} in {}", patch.section, target.display());
        return Ok(());
    }

    let patched = splice_entry(&content, &pattern, &patch.entry);
    if patched == content {
        log::debug!("{} already contains the entry, skipping", patch.section);
        return Ok(());
    }
    ctx.write_patch(target, patch.section, &patched)
}

/// Applies one patch, logging instead of failing.
pub fn patch_file(ctx: &mut GenerationContext, patch: &ConstantPatch) {
    if let Err(err) = try_patch(ctx, patch) {
        log::warn!("Failed to update {} in {}: {err}", patch.section, patch.file);
    }
}

/// The shared-file patches that register a new form.
pub fn form_constant_patches(ctx: &GenerationContext) -> Vec<ConstantPatch> {
    let store = ctx.store();
    let form_id = store.get_str("formIdConst").unwrap_or_default().to_string();
    let form_number = store.get_str("formNumber").unwrap_or_default().to_string();
    let benefit = store.get_str("benefitDescription").unwrap_or_default().to_string();
    let tracking_prefix = store.get_str("trackingPrefix").unwrap_or_default().to_string();

    let mut patches = vec![
        ConstantPatch {
            file: PLATFORM_CONSTANTS_FILE,
            section: "VA_FORM_IDS",
            pattern: r"(export const VA_FORM_IDS = Object\.freeze\(\{)([\s\S]*?)(\}\))",
            entry: format!("  {form_id}: '{form_number}',"),
        },
        ConstantPatch {
            file: PLATFORM_CONSTANTS_FILE,
            section: "FORM_BENEFITS",
            pattern: r"(export const FORM_BENEFITS = \{)([\s\S]*?)(\};)",
            entry: format!("  [VA_FORM_IDS.{form_id}]: '{benefit}',"),
        },
        ConstantPatch {
            file: PLATFORM_CONSTANTS_FILE,
            section: "TRACKING_PREFIXES",
            pattern: r"(export const TRACKING_PREFIXES = \{)([\s\S]*?)(\};)",
            entry: format!("  [VA_FORM_IDS.{form_id}]: '{tracking_prefix}',"),
        },
        ConstantPatch {
            file: PLATFORM_CONSTANTS_FILE,
            section: "SIP_ENABLED_FORMS",
            pattern: r"(export const SIP_ENABLED_FORMS = new Set\(\[)([\s\S]*?)(\]\);)",
            entry: format!("  VA_FORM_IDS.{form_id},"),
        },
        ConstantPatch {
            file: PLATFORM_CONSTANTS_FILE,
            section: "getAllFormLinks",
            pattern: r"(export const getAllFormLinks = [\s\S]*?return \{)([\s\S]*?)( {2}\};)",
            entry: format!("    [VA_FORM_IDS.{form_id}]: `${{tryGetAppUrl('{form_number}')}}/`,"),
        },
    ];

    if store.is_truthy("addToMyVaSip") {
        patches.push(ConstantPatch {
            file: PLATFORM_CONSTANTS_FILE,
            section: "MY_VA_SIP_FORMS",
            pattern: r"(export const MY_VA_SIP_FORMS = \[)([\s\S]*?)(\];)",
            entry: format!(
                "  {{\n    id: VA_FORM_IDS.{form_id},\n    benefit: '{benefit}',\n    title: '{benefit} (VA Form {form_number})',\n    description: '{benefit} (VA Form {form_number})',\n    trackingPrefix: '{tracking_prefix}',\n  }},"
            ),
        });
    }

    if !store.is_truthy("usesVetsJsonSchema") {
        patches.push(ConstantPatch {
            file: FORMS_CONFIG_VALIDATOR_FILE,
            section: "missingFromVetsJsonSchema",
            pattern: r"(const missingFromVetsJsonSchema = \[)([\s\S]*?)(\];)",
            entry: format!("  VA_FORM_IDS.{form_id},"),
        });
    }

    patches
}

/// Registers the form in the platform constants files.
pub fn update_form_constants(ctx: &mut GenerationContext) {
    for patch in form_constant_patches(ctx) {
        patch_file(ctx, &patch);
    }
}
