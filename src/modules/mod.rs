pub mod firebase_config;

pub use self::firebase_config::model::FirebaseConfig;
