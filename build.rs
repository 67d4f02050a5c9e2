fn main() {
    // ESP-IDF environment is only needed for the demo binary
    #[cfg(feature = "esp32")]
    embuild::espidf::sysenv::output();

    println!("cargo:rerun-if-changed=build.rs");
}
