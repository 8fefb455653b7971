//! Тесты для лексического анализатора

pub mod source_tests;
