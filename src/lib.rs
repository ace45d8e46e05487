pub mod app_config;
pub mod constants;
pub mod db;
pub mod error;
pub mod flash;
pub mod orm;
pub mod politicians;
pub mod results;
pub mod seed;
pub mod survey;
pub mod web;
