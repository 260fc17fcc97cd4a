//! tests/mod.rs
//! Pruebas del servicio. Corren con actix_rt y SQLite en memoria.

mod support;
