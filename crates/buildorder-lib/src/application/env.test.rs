use super::*;

fn env_with(f: impl FnOnce(&mut EnvironmentConfig)) -> EnvironmentConfig {
    let mut env = EnvironmentConfig::default();
    f(&mut env);
    env
}

#[test]
fn test_no_variables_keep_intent() {
    let env = EnvironmentConfig::default();
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
    assert_eq!(env.apply_color_config(ColorIntent::Always), ColorIntent::Always);
}

#[test]
fn test_no_color_environment_variable() {
    let env = env_with(|e| e.no_color = Some("1".into()));
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env = env_with(|e| e.no_color = Some(String::new()));
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_force_color_environment_variable() {
    let env = env_with(|e| e.force_color = Some("1".into()));
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Always);

    let env = env_with(|e| e.force_color = Some("false".into()));
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_environment_variable_precedence() {
    let env = env_with(|e| {
        e.clicolor = Some("0".into());
        e.no_color = Some("1".into());
        e.force_color = Some("1".into());
    });

    // FORCE_COLOR=1 wins over NO_COLOR and CLICOLOR
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Always);
}

#[test]
fn test_ci_environment_variable() {
    let env = env_with(|e| {
        e.ci = Some("true".into());
        e.force_color = Some("1".into());
    });
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}
