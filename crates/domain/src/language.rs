use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

/// ISO 639-1 two-letter language codes.
pub const ISO_639_1_LANGUAGES: &[Language] = &[
    lang("aa", "Afar"),
    lang("ab", "Abkhazian"),
    lang("ae", "Avestan"),
    lang("af", "Afrikaans"),
    lang("ak", "Akan"),
    lang("am", "Amharic"),
    lang("an", "Aragonese"),
    lang("ar", "Arabic"),
    lang("as", "Assamese"),
    lang("av", "Avaric"),
    lang("ay", "Aymara"),
    lang("az", "Azerbaijani"),
    lang("ba", "Bashkir"),
    lang("be", "Belarusian"),
    lang("bg", "Bulgarian"),
    lang("bi", "Bislama"),
    lang("bm", "Bambara"),
    lang("bn", "Bengali"),
    lang("bo", "Tibetan"),
    lang("br", "Breton"),
    lang("bs", "Bosnian"),
    lang("ca", "Catalan"),
    lang("ce", "Chechen"),
    lang("ch", "Chamorro"),
    lang("co", "Corsican"),
    lang("cr", "Cree"),
    lang("cs", "Czech"),
    lang("cu", "Church Slavic"),
    lang("cv", "Chuvash"),
    lang("cy", "Welsh"),
    lang("da", "Danish"),
    lang("de", "German"),
    lang("dv", "Dhivehi"),
    lang("dz", "Dzongkha"),
    lang("ee", "Ewe"),
    lang("el", "Modern Greek"),
    lang("en", "English"),
    lang("eo", "Esperanto"),
    lang("es", "Spanish"),
    lang("et", "Estonian"),
    lang("eu", "Basque"),
    lang("fa", "Persian"),
    lang("ff", "Fulah"),
    lang("fi", "Finnish"),
    lang("fj", "Fijian"),
    lang("fo", "Faroese"),
    lang("fr", "French"),
    lang("fy", "Western Frisian"),
    lang("ga", "Irish"),
    lang("gd", "Scottish Gaelic"),
    lang("gl", "Galician"),
    lang("gn", "Guarani"),
    lang("gu", "Gujarati"),
    lang("gv", "Manx"),
    lang("ha", "Hausa"),
    lang("he", "Hebrew"),
    lang("hi", "Hindi"),
    lang("ho", "Hiri Motu"),
    lang("hr", "Croatian"),
    lang("ht", "Haitian"),
    lang("hu", "Hungarian"),
    lang("hy", "Armenian"),
    lang("hz", "Herero"),
    lang("ia", "Interlingua"),
    lang("id", "Indonesian"),
    lang("ie", "Interlingue"),
    lang("ig", "Igbo"),
    lang("ii", "Sichuan Yi"),
    lang("ik", "Inupiaq"),
    lang("io", "Ido"),
    lang("is", "Icelandic"),
    lang("it", "Italian"),
    lang("iu", "Inuktitut"),
    lang("ja", "Japanese"),
    lang("jv", "Javanese"),
    lang("ka", "Georgian"),
    lang("kg", "Kongo"),
    lang("ki", "Kikuyu"),
    lang("kj", "Kuanyama"),
    lang("kk", "Kazakh"),
    lang("kl", "Kalaallisut"),
    lang("km", "Central Khmer"),
    lang("kn", "Kannada"),
    lang("ko", "Korean"),
    lang("kr", "Kanuri"),
    lang("ks", "Kashmiri"),
    lang("ku", "Kurdish"),
    lang("kv", "Komi"),
    lang("kw", "Cornish"),
    lang("ky", "Kirghiz"),
    lang("la", "Latin"),
    lang("lb", "Luxembourgish"),
    lang("lg", "Ganda"),
    lang("li", "Limburgan"),
    lang("ln", "Lingala"),
    lang("lo", "Lao"),
    lang("lt", "Lithuanian"),
    lang("lu", "Luba-Katanga"),
    lang("lv", "Latvian"),
    lang("mg", "Malagasy"),
    lang("mh", "Marshallese"),
    lang("mi", "Maori"),
    lang("mk", "Macedonian"),
    lang("ml", "Malayalam"),
    lang("mn", "Mongolian"),
    lang("mr", "Marathi"),
    lang("ms", "Malay"),
    lang("mt", "Maltese"),
    lang("my", "Burmese"),
    lang("na", "Nauru"),
    lang("nb", "Norwegian Bokmål"),
    lang("nd", "North Ndebele"),
    lang("ne", "Nepali"),
    lang("ng", "Ndonga"),
    lang("nl", "Dutch"),
    lang("nn", "Norwegian Nynorsk"),
    lang("no", "Norwegian"),
    lang("nr", "South Ndebele"),
    lang("nv", "Navajo"),
    lang("ny", "Nyanja"),
    lang("oc", "Occitan"),
    lang("oj", "Ojibwa"),
    lang("om", "Oromo"),
    lang("or", "Oriya"),
    lang("os", "Ossetian"),
    lang("pa", "Panjabi"),
    lang("pi", "Pali"),
    lang("pl", "Polish"),
    lang("ps", "Pushto"),
    lang("pt", "Portuguese"),
    lang("qu", "Quechua"),
    lang("rm", "Romansh"),
    lang("rn", "Rundi"),
    lang("ro", "Romanian"),
    lang("ru", "Russian"),
    lang("rw", "Kinyarwanda"),
    lang("sa", "Sanskrit"),
    lang("sc", "Sardinian"),
    lang("sd", "Sindhi"),
    lang("se", "Northern Sami"),
    lang("sg", "Sango"),
    lang("si", "Sinhala"),
    lang("sk", "Slovak"),
    lang("sl", "Slovenian"),
    lang("sm", "Samoan"),
    lang("sn", "Shona"),
    lang("so", "Somali"),
    lang("sq", "Albanian"),
    lang("sr", "Serbian"),
    lang("ss", "Swati"),
    lang("st", "Southern Sotho"),
    lang("su", "Sundanese"),
    lang("sv", "Swedish"),
    lang("sw", "Swahili"),
    lang("ta", "Tamil"),
    lang("te", "Telugu"),
    lang("tg", "Tajik"),
    lang("th", "Thai"),
    lang("ti", "Tigrinya"),
    lang("tk", "Turkmen"),
    lang("tl", "Tagalog"),
    lang("tn", "Tswana"),
    lang("to", "Tonga"),
    lang("tr", "Turkish"),
    lang("ts", "Tsonga"),
    lang("tt", "Tatar"),
    lang("tw", "Twi"),
    lang("ty", "Tahitian"),
    lang("ug", "Uighur"),
    lang("uk", "Ukrainian"),
    lang("ur", "Urdu"),
    lang("uz", "Uzbek"),
    lang("ve", "Venda"),
    lang("vi", "Vietnamese"),
    lang("vo", "Volapük"),
    lang("wa", "Walloon"),
    lang("wo", "Wolof"),
    lang("xh", "Xhosa"),
    lang("yi", "Yiddish"),
    lang("yo", "Yoruba"),
    lang("za", "Zhuang"),
    lang("zh", "Chinese"),
    lang("zu", "Zulu"),
];
