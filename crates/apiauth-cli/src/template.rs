//! # Template Subcommand
//!
//! Walks the `Resources` section of a CloudFormation template and checks
//! every resource whose `Type` is one of the hook's target types. Other
//! resources are skipped.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use serde_json::Value;

use apiauth_core::document::{field, mapping};
use apiauth_core::{AuthValidator, TargetType, Verdict, Violation};

use crate::document::load_document;

/// Arguments for the `apiauth template` subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// CloudFormation template (JSON or YAML).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Result of checking one template resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFinding {
    pub logical_id: String,
    pub target: TargetType,
    pub compliant: bool,
    pub violation: Option<Violation>,
}

/// Check every recognized resource in a template.
///
/// A missing or non-object `Properties` is checked as an empty mapping.
pub fn check_template(template: &Value) -> Vec<TemplateFinding> {
    let empty = Value::Object(serde_json::Map::new());
    let Some(resources) = field(template, "Resources").and_then(mapping) else {
        return Vec::new();
    };

    let mut findings = Vec::new();
    for (logical_id, resource) in resources {
        let Some(type_name) = field(resource, "Type").and_then(Value::as_str) else {
            tracing::debug!(%logical_id, "resource has no Type; skipping");
            continue;
        };
        let target: TargetType = match type_name.parse() {
            Ok(target) => target,
            Err(_) => {
                tracing::debug!(%logical_id, type_name, "not a target type; skipping");
                continue;
            }
        };
        let properties = field(resource, "Properties")
            .filter(|p| p.is_object())
            .unwrap_or(&empty);

        let finding = match AuthValidator.check_target(target, properties) {
            Verdict::Approved => TemplateFinding {
                logical_id: logical_id.clone(),
                target,
                compliant: true,
                violation: None,
            },
            Verdict::Denied(violation) => TemplateFinding {
                logical_id: logical_id.clone(),
                target,
                compliant: false,
                violation,
            },
        };
        findings.push(finding);
    }
    findings
}

/// Execute the template subcommand.
///
/// Returns exit code: 0 if every checked resource is compliant, 1 otherwise.
pub fn run_template(args: &TemplateArgs) -> Result<u8> {
    let template = load_document(&args.path)?;
    if !template.is_object() {
        bail!("{} is not a template mapping", args.path.display());
    }

    let findings = check_template(&template);
    let mut failures = 0usize;
    for finding in &findings {
        if finding.compliant {
            println!("  OK   {} ({})", finding.logical_id, finding.target);
        } else {
            failures += 1;
            match &finding.violation {
                Some(v) => println!("  FAIL {} ({}): {v}", finding.logical_id, finding.target),
                None => println!("  FAIL {} ({})", finding.logical_id, finding.target),
            }
        }
    }

    println!(
        "\n{} resource(s) checked, {} non-compliant",
        findings.len(),
        failures
    );

    Ok(if failures == 0 { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn checks_only_target_types() {
        let template = json!({
            "Resources": {
                "Bucket": {"Type": "AWS::S3::Bucket", "Properties": {}},
                "Method": {"Type": "AWS::ApiGateway::Method", "Properties": {"AuthorizerId": "a1"}},
                "Route": {"Type": "AWS::ApiGatewayV2::Route"}
            }
        });
        let findings = check_template(&template);
        assert_eq!(findings.len(), 2);

        let method = findings.iter().find(|f| f.logical_id == "Method").unwrap();
        assert!(method.compliant);

        let route = findings.iter().find(|f| f.logical_id == "Route").unwrap();
        assert!(!route.compliant);
        assert_eq!(route.target, TargetType::Route);
        assert!(route.violation.is_none());
    }

    #[test]
    fn reports_offending_operation() {
        let template = json!({
            "Resources": {
                "Api": {
                    "Type": "AWS::ApiGateway::RestApi",
                    "Properties": {"Body": {"paths": {"/pets": {"delete": {}}}}}
                }
            }
        });
        let findings = check_template(&template);
        assert_eq!(
            findings[0].violation,
            Some(Violation {
                path: "/pets".into(),
                method: "delete".into(),
            })
        );
    }

    #[test]
    fn template_without_resources_has_no_findings() {
        assert!(check_template(&json!({"Parameters": {}})).is_empty());
    }

    #[test]
    fn run_template_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.yaml");
        std::fs::write(
            &good,
            "Resources:\n  Route:\n    Type: AWS::ApiGatewayV2::Route\n    Properties:\n      AuthorizerId: !Ref Authorizer\n",
        )
        .unwrap();
        assert_eq!(run_template(&TemplateArgs { path: good }).unwrap(), 0);

        let bad = dir.path().join("bad.yaml");
        std::fs::write(
            &bad,
            "Resources:\n  Route:\n    Type: AWS::ApiGatewayV2::Route\n    Properties:\n      RouteKey: GET /\n",
        )
        .unwrap();
        assert_eq!(run_template(&TemplateArgs { path: bad }).unwrap(), 1);
    }
}
