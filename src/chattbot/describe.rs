//! Rendering for `--describe`: a human-readable block describing a resolved
//! action/request pair, including its additional-argument spec.

use crate::registry::Registry;
use crate::resolve::ResolvedAction;
use std::fmt::Write;

pub fn render(resolved: &ResolvedAction) -> String {
    let registry = Registry::global();

    let Some(description) = registry.request_description(resolved.request()) else {
        // Tolerated gap: a request may be listed without a description built.
        return format!(
            "Description not built for action_type='{}', request='{}'",
            resolved.action_type(),
            resolved.request()
        );
    };

    let mut out = String::from("{\n");
    let _ = writeln!(out, "    action_type: {}", resolved.action_type());
    let _ = writeln!(out, "    request: {}", resolved.request());
    let _ = writeln!(out, "    description: {}", description);

    let arguments = registry.request_arguments(resolved.request());
    match arguments {
        Some(spec) if !spec.is_empty() => {
            out.push_str("    additional arguments: {\n");
            for (name, requirement) in spec {
                let _ = writeln!(out, "        {}: {}", name, requirement);
            }
            out.push_str("    }\n");
        }
        _ => out.push_str("    additional arguments: None\n"),
    }

    out.push('}');
    out
}
