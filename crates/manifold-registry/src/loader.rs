//! Directory loader: walks a manifest tree and fills the index.
//!
//! Failures are accumulated across the whole walk (never aborting on the
//! first one) and prefixed with the offending file's path. Load policies
//! gate each document: a deny skips the file, an allow may inject
//! path-derived tokens into the body before it is decoded.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, info};

use manifold_core::{
    check_load_policy, inject_tokens, CompiledPolicy, Effect, ManifestKind, ManifoldError,
    TokenBindings,
};

use crate::api::v1;
use crate::index::Index;
use crate::validate;

impl Index {
    /// Load every `.yaml`/`.yml` document under `dir`, honoring `policies`.
    ///
    /// Returns all accumulated errors; the index keeps whatever loaded
    /// cleanly. Required-field validation over the index runs only after a
    /// clean walk.
    pub fn load(&mut self, dir: &Path, policies: &[CompiledPolicy]) -> Vec<ManifoldError> {
        let mut errs = Vec::new();
        walk(dir, dir, self, policies, &mut errs);
        if !errs.is_empty() {
            return errs;
        }
        let errs = validate::validate_index(self);
        if errs.is_empty() {
            info!(
                kinds = self.kind_count(),
                resources = self.resource_count(),
                templates = self.template_count(),
                repositories = self.repository_count(),
                "index loaded"
            );
        }
        errs
    }
}

fn walk(
    dir: &Path,
    root: &Path,
    index: &mut Index,
    policies: &[CompiledPolicy],
    errs: &mut Vec<ManifoldError>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            errs.push(ManifoldError::Walk(format!("{}: {e}", dir.display())));
            return;
        }
    };
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(e) => errs.push(ManifoldError::Walk(format!("{}: {e}", dir.display()))),
        }
    }
    // Lexical order keeps error output stable across platforms.
    paths.sort();
    for path in paths {
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(false, |n| n.starts_with('.'));
        if hidden {
            continue;
        }
        if path.is_dir() {
            walk(&path, root, index, policies, errs);
            continue;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => load_document(&path, root, index, policies, errs),
            _ => {}
        }
    }
}

fn load_document(
    path: &Path,
    root: &Path,
    index: &mut Index,
    policies: &[CompiledPolicy],
    errs: &mut Vec<ManifoldError>,
) {
    let shown = path.display().to_string();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            errs.push(doc_err(&shown, format!("read failed: {e}")));
            return;
        }
    };
    let doc: Value = match serde_yaml::from_str(&text) {
        Ok(doc) => doc,
        Err(e) => {
            errs.push(doc_err(&shown, e.to_string()));
            return;
        }
    };
    let Value::Mapping(mut doc) = doc else {
        errs.push(doc_err(&shown, "document is not a mapping"));
        return;
    };

    match doc.get("apiVersion").and_then(Value::as_str) {
        None => {
            errs.push(doc_err(&shown, "no apiVersion"));
            return;
        }
        Some(version) if version != v1::API_VERSION => {
            errs.push(doc_err(&shown, "invalid apiVersion"));
            return;
        }
        Some(_) => {}
    }

    let kind = if doc.contains_key("resource") {
        ManifestKind::Resource
    } else if doc.contains_key("template") {
        ManifestKind::Template
    } else if doc.contains_key("repository") {
        ManifestKind::Repository
    } else {
        errs.push(doc_err(&shown, "no resource or template"));
        return;
    };

    let (top_fields, spec_fields) = match kind {
        ManifestKind::Resource => (v1::VALID_RESOURCE_FIELDS, v1::VALID_RESOURCE_SPEC_FIELDS),
        ManifestKind::Template => (v1::VALID_TEMPLATE_FIELDS, v1::VALID_TEMPLATE_SPEC_FIELDS),
        ManifestKind::Repository => (v1::VALID_REPOSITORY_FIELDS, v1::VALID_REPOSITORY_SPEC_FIELDS),
    };
    if let Some(reason) = validate::invalid_field(kind.as_str(), &doc, top_fields) {
        errs.push(doc_err(&shown, reason));
        return;
    }

    let Some(body) = doc.get(kind.as_str()) else {
        return;
    };
    let Some(body_map) = body.as_mapping() else {
        errs.push(doc_err(&shown, format!("{} must be a mapping", kind.as_str())));
        return;
    };
    let spec_label = format!("{} spec", kind.as_str());
    if let Some(reason) = validate::invalid_field(&spec_label, body_map, spec_fields) {
        errs.push(doc_err(&shown, reason));
        return;
    }
    if kind == ManifestKind::Resource {
        if let Some(Value::Sequence(outputs)) = body_map.get("outputs") {
            for output in outputs {
                let Some(output) = output.as_mapping() else { continue };
                if let Some(reason) =
                    validate::invalid_field("output spec", output, v1::VALID_OUTPUT_SPEC_FIELDS)
                {
                    errs.push(doc_err(&shown, reason));
                    return;
                }
            }
        }
    }

    // Policies see the path relative to the load root, slash-segmented.
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    let bindings = match check_load_policy(&rel, kind, body, policies) {
        Some(decision) if decision.effect == Effect::Deny => {
            debug!(path = %shown, policy = %decision.policy, "load denied by policy");
            return;
        }
        Some(decision) => decision.bindings,
        None => TokenBindings::new(),
    };
    if !bindings.is_empty() {
        if let Some(body) = doc.get_mut(kind.as_str()) {
            inject_tokens(body, &bindings);
        }
    }

    let doc = Value::Mapping(doc);
    let result = match kind {
        ManifestKind::Resource => serde_yaml::from_value::<v1::Resource>(doc)
            .map_err(|e| e.to_string())
            .and_then(|r| index.add_resource(r).map_err(|e| e.to_string())),
        ManifestKind::Template => serde_yaml::from_value::<v1::Template>(doc)
            .map_err(|e| e.to_string())
            .and_then(|t| index.add_template(t).map_err(|e| e.to_string())),
        ManifestKind::Repository => serde_yaml::from_value::<v1::Repository>(doc)
            .map_err(|e| e.to_string())
            .and_then(|r| index.add_repository(r).map_err(|e| e.to_string())),
    };
    match result {
        Ok(()) => debug!(path = %shown, kind = kind.as_str(), "document indexed"),
        Err(reason) => errs.push(doc_err(&shown, reason)),
    }
}

fn doc_err(path: &str, reason: impl Into<String>) -> ManifoldError {
    ManifoldError::Document {
        path: path.to_string(),
        reason: reason.into(),
    }
}
