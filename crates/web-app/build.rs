#![deny(clippy::pedantic)]

const VARIABLES: [&str; 4] = [
    "MUSCLE_ATLAS_SUPABASE_URL",
    "MUSCLE_ATLAS_SUPABASE_ANON_KEY",
    "MUSCLE_ATLAS_INVITE_EXPIRY",
    "MUSCLE_ATLAS_LOG_LEVEL",
];

fn main() {
    for variable in VARIABLES {
        println!("cargo:rerun-if-env-changed={variable}");
    }
}
