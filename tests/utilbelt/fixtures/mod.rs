// tests/utilbelt/fixtures/mod.rs
