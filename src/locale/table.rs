//! The locale table: one row per unified locale.
//!
//! Every lookup structure in [`super::registry::LocaleRegistry`] is derived from
//! [`LOCALE_ROWS`] and the two alias lists below. Nothing else may introduce a
//! unified code or a store code.

/// A single row of the locale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleRow {
    /// Unified code, `language`, `language-REGION` or `language-Script`.
    pub unified: &'static str,
    /// App Store Connect code, `None` when the App Store has no such locale.
    pub app_store: Option<&'static str>,
    /// Google Play Console code, `None` when Google Play has no such locale.
    pub google_play: Option<&'static str>,
    /// English display name.
    pub name: &'static str,
}

const fn row(
    unified: &'static str,
    app_store: Option<&'static str>,
    google_play: Option<&'static str>,
    name: &'static str,
) -> LocaleRow {
    LocaleRow {
        unified,
        app_store,
        google_play,
        name,
    }
}

/// An alternate store spelling that resolves to a unified code on ingest only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleAlias {
    pub code: &'static str,
    pub unified: &'static str,
}

const fn alias(code: &'static str, unified: &'static str) -> LocaleAlias {
    LocaleAlias { code, unified }
}

/// The built-in locale table.
///
/// Region proxies: `ar` is published to the App Store as `ar-SA`, and `es-419`
/// as `es-MX`. Script variants: `zh-Hans` / `zh-Hant` keep their script form on
/// the App Store and become `zh-CN` / `zh-TW` on Google Play.
pub static LOCALE_ROWS: &[LocaleRow] = &[
    row("af", None, Some("af"), "Afrikaans"),
    row("am", None, Some("am"), "Amharic"),
    row("ar", Some("ar-SA"), Some("ar"), "Arabic"),
    row("az-AZ", None, Some("az-AZ"), "Azerbaijani"),
    row("be", None, Some("be"), "Belarusian"),
    row("bg", None, Some("bg"), "Bulgarian"),
    row("bn-BD", None, Some("bn-BD"), "Bangla"),
    row("ca", Some("ca"), Some("ca"), "Catalan"),
    row("cs-CZ", Some("cs"), Some("cs-CZ"), "Czech"),
    row("da-DK", Some("da"), Some("da-DK"), "Danish"),
    row("de-DE", Some("de-DE"), Some("de-DE"), "German"),
    row("el-GR", Some("el"), Some("el-GR"), "Greek"),
    row("en-AU", Some("en-AU"), Some("en-AU"), "English (Australia)"),
    row("en-CA", Some("en-CA"), Some("en-CA"), "English (Canada)"),
    row("en-GB", Some("en-GB"), Some("en-GB"), "English (U.K.)"),
    row("en-IN", None, Some("en-IN"), "English (India)"),
    row("en-SG", None, Some("en-SG"), "English (Singapore)"),
    row("en-US", Some("en-US"), Some("en-US"), "English (U.S.)"),
    row("en-ZA", None, Some("en-ZA"), "English (South Africa)"),
    row("es-419", Some("es-MX"), Some("es-419"), "Spanish (Latin America)"),
    row("es-ES", Some("es-ES"), Some("es-ES"), "Spanish (Spain)"),
    row("es-US", None, Some("es-US"), "Spanish (United States)"),
    row("et", None, Some("et"), "Estonian"),
    row("eu-ES", None, Some("eu-ES"), "Basque"),
    row("fa", None, Some("fa"), "Persian"),
    row("fa-AE", None, Some("fa-AE"), "Persian (United Arab Emirates)"),
    row("fa-AF", None, Some("fa-AF"), "Persian (Afghanistan)"),
    row("fa-IR", None, Some("fa-IR"), "Persian (Iran)"),
    row("fi-FI", Some("fi"), Some("fi-FI"), "Finnish"),
    row("fil", None, Some("fil"), "Filipino"),
    row("fr-CA", Some("fr-CA"), Some("fr-CA"), "French (Canada)"),
    row("fr-FR", Some("fr-FR"), Some("fr-FR"), "French (France)"),
    row("gl-ES", None, Some("gl-ES"), "Galician"),
    row("gu", None, Some("gu"), "Gujarati"),
    row("he", Some("he"), Some("iw-IL"), "Hebrew"),
    row("hi-IN", Some("hi"), Some("hi-IN"), "Hindi"),
    row("hr", Some("hr"), Some("hr"), "Croatian"),
    row("hu-HU", Some("hu"), Some("hu-HU"), "Hungarian"),
    row("hy-AM", None, Some("hy-AM"), "Armenian"),
    row("id", Some("id"), Some("id"), "Indonesian"),
    row("is-IS", None, Some("is-IS"), "Icelandic"),
    row("it-IT", Some("it"), Some("it-IT"), "Italian"),
    row("ja-JP", Some("ja"), Some("ja-JP"), "Japanese"),
    row("ka-GE", None, Some("ka-GE"), "Georgian"),
    row("kk", None, Some("kk"), "Kazakh"),
    row("km-KH", None, Some("km-KH"), "Khmer"),
    row("kn-IN", None, Some("kn-IN"), "Kannada"),
    row("ko-KR", Some("ko"), Some("ko-KR"), "Korean"),
    row("ky-KG", None, Some("ky-KG"), "Kyrgyz"),
    row("lo-LA", None, Some("lo-LA"), "Lao"),
    row("lt", None, Some("lt"), "Lithuanian"),
    row("lv", None, Some("lv"), "Latvian"),
    row("mk-MK", None, Some("mk-MK"), "Macedonian"),
    row("ml-IN", None, Some("ml-IN"), "Malayalam"),
    row("mn-MN", None, Some("mn-MN"), "Mongolian"),
    row("mr-IN", None, Some("mr-IN"), "Marathi"),
    row("ms", Some("ms"), Some("ms"), "Malay"),
    row("ms-MY", None, Some("ms-MY"), "Malay (Malaysia)"),
    row("my-MM", None, Some("my-MM"), "Burmese"),
    row("ne-NP", None, Some("ne-NP"), "Nepali"),
    row("nl-NL", Some("nl-NL"), Some("nl-NL"), "Dutch"),
    row("no-NO", Some("no"), Some("no-NO"), "Norwegian"),
    row("pa", None, Some("pa"), "Punjabi"),
    row("pl-PL", Some("pl"), Some("pl-PL"), "Polish"),
    row("pt-BR", Some("pt-BR"), Some("pt-BR"), "Portuguese (Brazil)"),
    row("pt-PT", Some("pt-PT"), Some("pt-PT"), "Portuguese (Portugal)"),
    row("rm", None, Some("rm"), "Romansh"),
    row("ro", Some("ro"), Some("ro"), "Romanian"),
    row("ru-RU", Some("ru"), Some("ru-RU"), "Russian"),
    row("si-LK", None, Some("si-LK"), "Sinhala"),
    row("sk", Some("sk"), Some("sk"), "Slovak"),
    row("sl", None, Some("sl"), "Slovenian"),
    row("sq", None, Some("sq"), "Albanian"),
    row("sr", None, Some("sr"), "Serbian"),
    row("sv-SE", Some("sv"), Some("sv-SE"), "Swedish"),
    row("sw", None, Some("sw"), "Swahili"),
    row("ta-IN", None, Some("ta-IN"), "Tamil"),
    row("te-IN", None, Some("te-IN"), "Telugu"),
    row("th", Some("th"), Some("th"), "Thai"),
    row("tr-TR", Some("tr"), Some("tr-TR"), "Turkish"),
    row("uk", Some("uk"), Some("uk"), "Ukrainian"),
    row("ur", None, Some("ur"), "Urdu"),
    row("vi", Some("vi"), Some("vi"), "Vietnamese"),
    row("zh-HK", None, Some("zh-HK"), "Chinese (Hong Kong)"),
    row("zh-Hans", Some("zh-Hans"), Some("zh-CN"), "Chinese (Simplified)"),
    row("zh-Hant", Some("zh-Hant"), Some("zh-TW"), "Chinese (Traditional)"),
    row("zu", None, Some("zu"), "Zulu"),
];

/// Legacy and alternate App Store Connect spellings.
pub static APP_STORE_ALIASES: &[LocaleAlias] = &[
    alias("ar", "ar"),
    alias("es-419", "es-419"),
    alias("nb", "no-NO"),
    alias("zh-CN", "zh-Hans"),
    alias("zh-TW", "zh-Hant"),
];

/// Legacy and alternate Google Play Console spellings.
pub static GOOGLE_PLAY_ALIASES: &[LocaleAlias] = &[
    alias("he-IL", "he"),
    alias("in", "id"),
    alias("nb-NO", "no-NO"),
    alias("tl", "fil"),
    alias("zh-Hans", "zh-Hans"),
    alias("zh-Hant", "zh-Hant"),
];
