use seabattle::{ServerConfig, DEFAULT_BIND};

// Only test in this binary touching the environment.
#[test]
fn test_from_env_uses_port_only() {
    std::env::remove_var("PORT");
    std::env::set_var("SEABATTLE_BIND", "127.0.0.1:6000");
    assert_eq!(ServerConfig::from_env().bind, DEFAULT_BIND);

    std::env::set_var("PORT", "8123");
    assert_eq!(ServerConfig::from_env().bind, "0.0.0.0:8123");

    std::env::remove_var("PORT");
    std::env::remove_var("SEABATTLE_BIND");
}
