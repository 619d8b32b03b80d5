use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=EXACTINT_LIMB_WIDTH");
    println!("cargo:rustc-check-cfg=cfg(limb_width_8, limb_width_16, limb_width_32, limb_width_64)");

    // Decide ideal limb width for the big integer kernel. Refer to
    // src/limb.rs for where this has an effect.
    let width = match env::var("EXACTINT_LIMB_WIDTH") {
        Ok(value) => match value.trim() {
            "8" => 8,
            "16" => 16,
            "32" => 32,
            "64" => 64,
            other => panic!(
                "EXACTINT_LIMB_WIDTH must be one of 8, 16, 32 or 64, found `{}`",
                other
            ),
        },
        Err(_) => {
            // Cargo exposes the target architecture to build scripts through
            // the environment; `cfg!` here would describe the host instead.
            let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
            match arch.as_str() {
                "aarch64" | "mips64" | "powerpc64" | "x86_64" => 64,
                _ => 32,
            }
        }
    };

    println!("cargo:rustc-cfg=limb_width_{}", width);
}
