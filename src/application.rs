pub mod fixture_service;
