// display locales offered in the profile settings; codes are BCP 47

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Locale {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALES: &[Locale] = &[
    Locale { code: "cs-CZ", name: "Čeština" },
    Locale { code: "da-DK", name: "Dansk" },
    Locale { code: "de-DE", name: "Deutsch" },
    Locale { code: "en-US", name: "English" },
    Locale { code: "es-ES", name: "Español" },
    Locale { code: "fi-FI", name: "Suomi" },
    Locale { code: "fr-FR", name: "Français" },
    Locale { code: "it-IT", name: "Italiano" },
    Locale { code: "ja-JP", name: "日本語" },
    Locale { code: "ko-KR", name: "한국어" },
    Locale { code: "nb-NO", name: "Norsk bokmål" },
    Locale { code: "nl-NL", name: "Nederlands" },
    Locale { code: "pl-PL", name: "Polski" },
    Locale { code: "pt-BR", name: "Português (Brasil)" },
    Locale { code: "pt-PT", name: "Português" },
    Locale { code: "ru-RU", name: "Русский" },
    Locale { code: "sv-SE", name: "Svenska" },
    Locale { code: "uk-UA", name: "Українська" },
    Locale { code: "zh-CN", name: "中文（简体）" },
    Locale { code: "zh-TW", name: "中文（繁體）" },
];

pub fn find_locale(code: Option<&str>) -> Option<&'static Locale> {
    let code = code?;

    LOCALES.iter().find(|locale| locale.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_well_formed() {
        for locale in LOCALES {
            assert!(!locale.code.is_empty());
            assert!(!locale.name.is_empty());
        }
    }

    #[test]
    fn lookup_by_code() {
        let locale = find_locale(Some("de-DE")).unwrap();
        assert_eq!(locale.name, "Deutsch");

        assert_eq!(find_locale(Some("xx-XX")), None);
        assert_eq!(find_locale(None), None);
    }
}
