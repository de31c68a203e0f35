pub struct CssLoader;

const MAIN: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styles/main.css"
));
const HEALTH: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styles/health.css"
));

impl CssLoader {
    #[inline(always)]
    pub fn get_main() -> &'static str {
        MAIN
    }

    #[inline(always)]
    pub fn get_health() -> &'static str {
        HEALTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_styles_are_present() {
        assert!(CssLoader::get_main().contains(".drawer"));
        assert!(CssLoader::get_health().contains(".tone-healthy"));
        assert!(CssLoader::get_health().contains(".loading-card"));
    }
}
