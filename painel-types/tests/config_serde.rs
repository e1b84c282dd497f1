use painel_types::{CacheConfig, ColumnMap, PainelConfig};

#[test]
fn partial_config_fills_defaults() {
    let json = r#"{"timezone":"America/Manaus","cache":{"ttl_ms":600000}}"#;
    let cfg: PainelConfig = serde_json::from_str(json).expect("deserialize painel config");

    assert_eq!(cfg.timezone, chrono_tz::America::Manaus);
    assert_eq!(cfg.cache.ttl_ms, 600_000);
    assert_eq!(cfg.ranking_limit, 10);
    assert_eq!(cfg.recent_limit, 5);
    assert_eq!(cfg.item_separator, ',');
    assert_eq!(cfg.columns, ColumnMap::default());
}

#[test]
fn default_timezone_is_sao_paulo() {
    let cfg = PainelConfig::default();
    assert_eq!(cfg.timezone, chrono_tz::America::Sao_Paulo);
    assert_eq!(cfg.cache.ttl().map(|d| d.as_secs()), Some(300));
}

#[test]
fn zero_ttl_disables_cache() {
    let cfg = CacheConfig { ttl_ms: 0 };
    assert!(cfg.ttl().is_none());
}

#[test]
fn column_overrides_keep_other_defaults() {
    let json = r#"{"sale_items":"FLAVORS"}"#;
    let cols: ColumnMap = serde_json::from_str(json).expect("deserialize columns");
    assert_eq!(cols.sale_items, "FLAVORS");
    assert_eq!(cols.sale_value, "VALOR DA VENDA");
    assert!(cols.first_blank().is_none());
}

#[test]
fn blank_column_is_reported() {
    let cols = ColumnMap {
        expense_value: "  ".into(),
        ..ColumnMap::default()
    };
    assert_eq!(cols.first_blank(), Some("expense_value"));
}
