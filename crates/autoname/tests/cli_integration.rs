use autoname::commands::{
    issue_names, plan_resources, read_plan_input, render_schema, resolve_config, NamingOverrides,
};
use autoname::CliError;
use serde_json::json;

fn overrides(product: &str, env: &str) -> NamingOverrides {
    NamingOverrides {
        product: Some(product.to_string()),
        env: Some(env.to_string()),
        pass_through: false,
    }
}

fn types(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_name_end_to_end() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("autoname.toml");
    std::fs::write(&config_path, "")?;

    let config = resolve_config(Some(&config_path), &overrides("app", "prod"))?;
    let names = issue_names(
        &config,
        &types(&[
            "aws:ec2/instance:Instance",
            "aws:ec2/instance:Instance",
            "aws:autoscaling/group:Group",
        ]),
    )?;
    assert_eq!(names, vec!["app-p-ec2-001", "app-p-ec2-002", "app-p-asg-001"]);
    Ok(())
}

#[test]
fn test_flags_override_config_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("autoname.toml");
    std::fs::write(
        &config_path,
        r#"
[naming]
product_code = "web"
environment = "dev"

[naming.type_codes]
Bucket = "s3b"
"#,
    )?;

    let from_file = resolve_config(Some(&config_path), &NamingOverrides::default())?;
    assert_eq!(
        issue_names(&from_file, &types(&["aws:s3/bucket:Bucket"]))?,
        vec!["web-d-s3b-001"]
    );

    let overridden = resolve_config(
        Some(&config_path),
        &NamingOverrides {
            env: Some("qa".to_string()),
            ..Default::default()
        },
    )?;
    assert_eq!(
        issue_names(&overridden, &types(&["aws:s3/bucket:Bucket"]))?,
        vec!["web-q-s3b-001"]
    );
    Ok(())
}

#[test]
fn test_missing_context_is_config_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("autoname.toml");
    std::fs::write(&config_path, "")?;

    let config = resolve_config(Some(&config_path), &NamingOverrides::default())?;
    let err = issue_names(&config, &types(&["aws:s3/bucket:Bucket"])).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    Ok(())
}

#[test]
fn test_malformed_descriptor_is_naming_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("autoname.toml");
    std::fs::write(&config_path, "")?;

    let config = resolve_config(Some(&config_path), &overrides("app", "prod"))?;
    let err = issue_names(&config, &types(&["aws:Bucket"])).unwrap_err();
    assert!(matches!(err, CliError::Naming(_)));
    assert!(err.to_string().contains("aws:Bucket"));
    Ok(())
}

#[test]
fn test_name_rejects_pass_through() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("autoname.json");
    std::fs::write(&config_path, r#"{"naming": {"mode": "pass-through"}}"#)?;

    let config = resolve_config(Some(&config_path), &NamingOverrides::default())?;
    assert!(matches!(
        issue_names(&config, &types(&["aws:s3/bucket:Bucket"])),
        Err(CliError::PassThroughUnsupported { command: "name" })
    ));
    Ok(())
}

#[test]
fn test_plan_from_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("autoname.toml");
    std::fs::write(&config_path, "")?;
    let plan_path = dir.path().join("plan.json");
    std::fs::write(
        &plan_path,
        serde_json::to_string(&json!([
            {"type": "aws:ec2/instance:Instance", "props": {"tags": {"Team": "core"}}},
            {"type": "aws:autoscaling/group:Group", "name": "workers"},
            {"type": "aws:s3/bucket:Bucket"}
        ]))?,
    )?;

    let config = resolve_config(Some(&config_path), &overrides("app", "prod"))?;
    let resources = plan_resources(&config, read_plan_input(&plan_path)?)?;

    let names: Vec<&str> = resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["app-p-ec2-001", "app-p-asg-001", "app-p-b-001"]);
    assert_eq!(
        resources[0].props["tags"],
        json!({"Team": "core", "Name": "app-p-ec2-001"})
    );
    assert_eq!(
        resources[1].props["tags"],
        json!([{"key": "Name", "value": "app-p-asg-001", "propagateAtLaunch": true}])
    );
    assert!(resources[2].props.get("tags").is_none());
    Ok(())
}

#[test]
fn test_plan_pass_through_keeps_names() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("autoname.toml");
    std::fs::write(&config_path, "")?;

    let config = resolve_config(
        Some(&config_path),
        &NamingOverrides {
            pass_through: true,
            ..Default::default()
        },
    )?;
    let specs = serde_json::from_value(json!([
        {"type": "aws:ec2/instance:Instance", "name": "bastion"}
    ]))?;
    let resources = plan_resources(&config, specs)?;
    assert_eq!(resources[0].name, "bastion");
    assert_eq!(resources[0].props["tags"], json!({"Name": "bastion"}));
    Ok(())
}

#[test]
fn test_plan_input_errors() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let plan_path = dir.path().join("plan.json");
    std::fs::write(&plan_path, r#"{"type": "not-a-list"}"#)?;
    assert!(matches!(
        read_plan_input(&plan_path),
        Err(CliError::PlanInput { .. })
    ));
    assert!(matches!(
        read_plan_input(&dir.path().join("missing.json")),
        Err(CliError::PlanInput { .. })
    ));
    Ok(())
}

#[test]
fn test_schema_mentions_sections() -> anyhow::Result<()> {
    let config_schema = render_schema(false)?;
    assert!(config_schema.contains("product_code"));
    assert!(config_schema.contains("pass-through"));

    let plan_schema = render_schema(true)?;
    assert!(plan_schema.contains("\"type\""));
    assert!(plan_schema.contains("parent"));
    Ok(())
}
