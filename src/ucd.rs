// ucd.rs - Unicode Character Database property model.
//
// Enumerations for the properties the scanner consumes (general category,
// script, East Asian Width, grapheme cluster break, emoji flags) plus the
// per-codepoint record the two-stage table stores. Values and names follow
// the UCD text files the loader reads.

use bitflags::bitflags;

/// A Unicode codepoint as a raw scalar in `[0, 0x110000)`.
pub type Codepoint = u32;

/// One past the highest codepoint.
pub const CODEPOINT_LIMIT: usize = 0x11_0000;

/// General_Category, as assigned by extracted/DerivedGeneralCategory.txt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneralCategory {
    #[default]
    Unassigned,
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonspacingMark,
    EnclosingMark,
    SpacingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
    Control,
    Format,
    PrivateUse,
    Surrogate,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    ConnectorPunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
    InitialPunctuation,
    FinalPunctuation,
}

impl GeneralCategory {
    /// Maps a two-letter UCD abbreviation ("Lu", "Mn", ...) to a category.
    pub fn from_abbreviation(value: &str) -> Option<GeneralCategory> {
        use GeneralCategory::*;
        Some(match value {
            "Cn" => Unassigned,
            "Lu" => UppercaseLetter,
            "Ll" => LowercaseLetter,
            "Lt" => TitlecaseLetter,
            "Lm" => ModifierLetter,
            "Lo" => OtherLetter,
            "Mn" => NonspacingMark,
            "Me" => EnclosingMark,
            "Mc" => SpacingMark,
            "Nd" => DecimalNumber,
            "Nl" => LetterNumber,
            "No" => OtherNumber,
            "Zs" => SpaceSeparator,
            "Zl" => LineSeparator,
            "Zp" => ParagraphSeparator,
            "Cc" => Control,
            "Cf" => Format,
            "Co" => PrivateUse,
            "Cs" => Surrogate,
            "Pd" => DashPunctuation,
            "Ps" => OpenPunctuation,
            "Pe" => ClosePunctuation,
            "Pc" => ConnectorPunctuation,
            "Po" => OtherPunctuation,
            "Sm" => MathSymbol,
            "Sc" => CurrencySymbol,
            "Sk" => ModifierSymbol,
            "So" => OtherSymbol,
            "Pi" => InitialPunctuation,
            "Pf" => FinalPunctuation,
            _ => return None,
        })
    }
}

/// Script, as assigned by Scripts.txt (ISO 15924 long names).
///
/// `Invalid` is the default for codepoints Scripts.txt does not mention and
/// for names the loader does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    #[default]
    Invalid,
    Common,
    Inherited,
    Adlam,
    Ahom,
    AnatolianHieroglyphs,
    Arabic,
    Armenian,
    Avestan,
    Balinese,
    Bamum,
    BassaVah,
    Batak,
    Bengali,
    Bhaiksuki,
    Bopomofo,
    Brahmi,
    Braille,
    Buginese,
    Buhid,
    CanadianAboriginal,
    Carian,
    CaucasianAlbanian,
    Chakma,
    Cham,
    Cherokee,
    Chorasmian,
    Coptic,
    Cuneiform,
    Cypriot,
    CyproMinoan,
    Cyrillic,
    Deseret,
    Devanagari,
    DivesAkuru,
    Dogra,
    Duployan,
    EgyptianHieroglyphs,
    Elbasan,
    Elymaic,
    Ethiopic,
    Georgian,
    Glagolitic,
    Gothic,
    Grantha,
    Greek,
    Gujarati,
    GunjalaGondi,
    Gurmukhi,
    Han,
    Hangul,
    HanifiRohingya,
    Hanunoo,
    Hatran,
    Hebrew,
    Hiragana,
    ImperialAramaic,
    InscriptionalPahlavi,
    InscriptionalParthian,
    Javanese,
    Kaithi,
    Kannada,
    Katakana,
    Kawi,
    KayahLi,
    Kharoshthi,
    KhitanSmallScript,
    Khmer,
    Khojki,
    Khudawadi,
    Lao,
    Latin,
    Lepcha,
    Limbu,
    LinearA,
    LinearB,
    Lisu,
    Lycian,
    Lydian,
    Mahajani,
    Makasar,
    Malayalam,
    Mandaic,
    Manichaean,
    Marchen,
    MasaramGondi,
    Medefaidrin,
    MeeteiMayek,
    MendeKikakui,
    MeroiticCursive,
    MeroiticHieroglyphs,
    Miao,
    Modi,
    Mongolian,
    Mro,
    Multani,
    Myanmar,
    Nabataean,
    NagMundari,
    Nandinagari,
    NewTaiLue,
    Newa,
    Nko,
    Nushu,
    NyiakengPuachueHmong,
    Ogham,
    OlChiki,
    OldHungarian,
    OldItalic,
    OldNorthArabian,
    OldPermic,
    OldPersian,
    OldSogdian,
    OldSouthArabian,
    OldTurkic,
    OldUyghur,
    Oriya,
    Osage,
    Osmanya,
    PahawhHmong,
    Palmyrene,
    PauCinHau,
    PhagsPa,
    Phoenician,
    PsalterPahlavi,
    Rejang,
    Runic,
    Samaritan,
    Saurashtra,
    Sharada,
    Shavian,
    Siddham,
    SignWriting,
    Sinhala,
    Sogdian,
    SoraSompeng,
    Soyombo,
    Sundanese,
    SylotiNagri,
    Syriac,
    Tagalog,
    Tagbanwa,
    TaiLe,
    TaiTham,
    TaiViet,
    Takri,
    Tamil,
    Tangsa,
    Tangut,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
    Tifinagh,
    Tirhuta,
    Toto,
    Ugaritic,
    Vai,
    Vithkuqi,
    Wancho,
    WarangCiti,
    Yezidi,
    Yi,
    ZanabazarSquare,
}

impl Script {
    /// Maps a Scripts.txt long name to a script value.
    pub fn from_name(value: &str) -> Option<Script> {
        use Script::*;
        Some(match value {
            "Adlam" => Adlam,
            "Ahom" => Ahom,
            "Anatolian_Hieroglyphs" => AnatolianHieroglyphs,
            "Arabic" => Arabic,
            "Armenian" => Armenian,
            "Avestan" => Avestan,
            "Balinese" => Balinese,
            "Bamum" => Bamum,
            "Bassa_Vah" => BassaVah,
            "Batak" => Batak,
            "Bengali" => Bengali,
            "Bhaiksuki" => Bhaiksuki,
            "Bopomofo" => Bopomofo,
            "Brahmi" => Brahmi,
            "Braille" => Braille,
            "Buginese" => Buginese,
            "Buhid" => Buhid,
            "Canadian_Aboriginal" => CanadianAboriginal,
            "Carian" => Carian,
            "Caucasian_Albanian" => CaucasianAlbanian,
            "Chakma" => Chakma,
            "Cham" => Cham,
            "Cherokee" => Cherokee,
            "Chorasmian" => Chorasmian,
            "Common" => Common,
            "Coptic" => Coptic,
            "Cuneiform" => Cuneiform,
            "Cypriot" => Cypriot,
            "Cypro_Minoan" => CyproMinoan,
            "Cyrillic" => Cyrillic,
            "Deseret" => Deseret,
            "Devanagari" => Devanagari,
            "Dives_Akuru" => DivesAkuru,
            "Dogra" => Dogra,
            "Duployan" => Duployan,
            "Egyptian_Hieroglyphs" => EgyptianHieroglyphs,
            "Elbasan" => Elbasan,
            "Elymaic" => Elymaic,
            "Ethiopic" => Ethiopic,
            "Georgian" => Georgian,
            "Glagolitic" => Glagolitic,
            "Gothic" => Gothic,
            "Grantha" => Grantha,
            "Greek" => Greek,
            "Gujarati" => Gujarati,
            "Gunjala_Gondi" => GunjalaGondi,
            "Gurmukhi" => Gurmukhi,
            "Han" => Han,
            "Hangul" => Hangul,
            "Hanifi_Rohingya" => HanifiRohingya,
            "Hanunoo" => Hanunoo,
            "Hatran" => Hatran,
            "Hebrew" => Hebrew,
            "Hiragana" => Hiragana,
            "Imperial_Aramaic" => ImperialAramaic,
            "Inherited" => Inherited,
            "Inscriptional_Pahlavi" => InscriptionalPahlavi,
            "Inscriptional_Parthian" => InscriptionalParthian,
            "Javanese" => Javanese,
            "Kaithi" => Kaithi,
            "Kannada" => Kannada,
            "Katakana" => Katakana,
            "Kawi" => Kawi,
            "Kayah_Li" => KayahLi,
            "Kharoshthi" => Kharoshthi,
            "Khitan_Small_Script" => KhitanSmallScript,
            "Khmer" => Khmer,
            "Khojki" => Khojki,
            "Khudawadi" => Khudawadi,
            "Lao" => Lao,
            "Latin" => Latin,
            "Lepcha" => Lepcha,
            "Limbu" => Limbu,
            "Linear_A" => LinearA,
            "Linear_B" => LinearB,
            "Lisu" => Lisu,
            "Lycian" => Lycian,
            "Lydian" => Lydian,
            "Mahajani" => Mahajani,
            "Makasar" => Makasar,
            "Malayalam" => Malayalam,
            "Mandaic" => Mandaic,
            "Manichaean" => Manichaean,
            "Marchen" => Marchen,
            "Masaram_Gondi" => MasaramGondi,
            "Medefaidrin" => Medefaidrin,
            "Meetei_Mayek" => MeeteiMayek,
            "Mende_Kikakui" => MendeKikakui,
            "Meroitic_Cursive" => MeroiticCursive,
            "Meroitic_Hieroglyphs" => MeroiticHieroglyphs,
            "Miao" => Miao,
            "Modi" => Modi,
            "Mongolian" => Mongolian,
            "Mro" => Mro,
            "Multani" => Multani,
            "Myanmar" => Myanmar,
            "Nabataean" => Nabataean,
            "Nag_Mundari" => NagMundari,
            "Nandinagari" => Nandinagari,
            "New_Tai_Lue" => NewTaiLue,
            "Newa" => Newa,
            "Nko" => Nko,
            "Nushu" => Nushu,
            "Nyiakeng_Puachue_Hmong" => NyiakengPuachueHmong,
            "Ogham" => Ogham,
            "Ol_Chiki" => OlChiki,
            "Old_Hungarian" => OldHungarian,
            "Old_Italic" => OldItalic,
            "Old_North_Arabian" => OldNorthArabian,
            "Old_Permic" => OldPermic,
            "Old_Persian" => OldPersian,
            "Old_Sogdian" => OldSogdian,
            "Old_South_Arabian" => OldSouthArabian,
            "Old_Turkic" => OldTurkic,
            "Old_Uyghur" => OldUyghur,
            "Oriya" => Oriya,
            "Osage" => Osage,
            "Osmanya" => Osmanya,
            "Pahawh_Hmong" => PahawhHmong,
            "Palmyrene" => Palmyrene,
            "Pau_Cin_Hau" => PauCinHau,
            "Phags_Pa" => PhagsPa,
            "Phoenician" => Phoenician,
            "Psalter_Pahlavi" => PsalterPahlavi,
            "Rejang" => Rejang,
            "Runic" => Runic,
            "Samaritan" => Samaritan,
            "Saurashtra" => Saurashtra,
            "Sharada" => Sharada,
            "Shavian" => Shavian,
            "Siddham" => Siddham,
            "SignWriting" => SignWriting,
            "Sinhala" => Sinhala,
            "Sogdian" => Sogdian,
            "Sora_Sompeng" => SoraSompeng,
            "Soyombo" => Soyombo,
            "Sundanese" => Sundanese,
            "Syloti_Nagri" => SylotiNagri,
            "Syriac" => Syriac,
            "Tagalog" => Tagalog,
            "Tagbanwa" => Tagbanwa,
            "Tai_Le" => TaiLe,
            "Tai_Tham" => TaiTham,
            "Tai_Viet" => TaiViet,
            "Takri" => Takri,
            "Tamil" => Tamil,
            "Tangsa" => Tangsa,
            "Tangut" => Tangut,
            "Telugu" => Telugu,
            "Thaana" => Thaana,
            "Thai" => Thai,
            "Tibetan" => Tibetan,
            "Tifinagh" => Tifinagh,
            "Tirhuta" => Tirhuta,
            "Toto" => Toto,
            "Ugaritic" => Ugaritic,
            "Vai" => Vai,
            "Vithkuqi" => Vithkuqi,
            "Wancho" => Wancho,
            "Warang_Citi" => WarangCiti,
            "Yezidi" => Yezidi,
            "Yi" => Yi,
            "Zanabazar_Square" => ZanabazarSquare,
            _ => return None,
        })
    }
}

/// East_Asian_Width, as assigned by EastAsianWidth.txt.
///
/// Codepoints the file does not mention default to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EastAsianWidth {
    Ambiguous,
    Fullwidth,
    Halfwidth,
    #[default]
    Neutral,
    Narrow,
    Wide,
}

impl EastAsianWidth {
    /// Maps an EastAsianWidth.txt abbreviation ("A", "F", "H", "N", "Na",
    /// "W") to a width class.
    pub fn from_abbreviation(value: &str) -> Option<EastAsianWidth> {
        Some(match value {
            "A" => EastAsianWidth::Ambiguous,
            "F" => EastAsianWidth::Fullwidth,
            "H" => EastAsianWidth::Halfwidth,
            "N" => EastAsianWidth::Neutral,
            "Na" => EastAsianWidth::Narrow,
            "W" => EastAsianWidth::Wide,
            _ => return None,
        })
    }
}

/// Grapheme_Cluster_Break, as assigned by auxiliary/GraphemeBreakProperty.txt.
///
/// Codepoints the file does not mention default to `Other`. The legacy
/// Unicode 10 emoji classes (E_Base, E_Modifier, Glue_After_Zwj, E_Base_GAZ)
/// are accepted for older data files; current files use Extend plus the
/// Extended_Pictographic emoji flag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphemeClusterBreak {
    #[default]
    Other,
    Undefined,
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    EBase,
    EModifier,
    GlueAfterZwj,
    EBaseGaz,
}

impl GraphemeClusterBreak {
    /// Maps a GraphemeBreakProperty.txt value name to a break class.
    pub fn from_name(value: &str) -> Option<GraphemeClusterBreak> {
        use GraphemeClusterBreak::*;
        Some(match value {
            "Other" => Other,
            "Undefined" => Undefined,
            "CR" => CR,
            "LF" => LF,
            "Control" => Control,
            "Extend" => Extend,
            "ZWJ" => ZWJ,
            "Regional_Indicator" => RegionalIndicator,
            "Prepend" => Prepend,
            "SpacingMark" => SpacingMark,
            "L" => L,
            "V" => V,
            "T" => T,
            "LV" => LV,
            "LVT" => LVT,
            "E_Base" => EBase,
            "E_Modifier" => EModifier,
            "Glue_After_Zwj" => GlueAfterZwj,
            "E_Base_GAZ" => EBaseGaz,
            _ => return None,
        })
    }
}

/// Classification used by emoji presentation segmentation, derived from
/// specific codepoints and the emoji flags. See [`emoji_segmentation_category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmojiSegmentationCategory {
    #[default]
    Invalid,
    Emoji,
    EmojiTextPresentation,
    EmojiEmojiPresentation,
    EmojiModifierBase,
    EmojiModifier,
    VS15,
    VS16,
    RegionalIndicator,
    KeyCapBase,
    CombiningEnclosingKeyCap,
    CombiningEnclosingCircleBackslash,
    ZWJ,
    TagBase,
    TagSequence,
    TagTerm,
}

bitflags! {
    /// Boolean codepoint properties, OR-merged across UCD files.
    ///
    /// The emoji bits come from emoji/emoji-data.txt; GRAPHEME_EXTEND comes
    /// from DerivedCoreProperties.txt.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PropertyFlags: u32 {
        const EMOJI = 1 << 0;
        const EMOJI_PRESENTATION = 1 << 1;
        const EMOJI_MODIFIER = 1 << 2;
        const EMOJI_MODIFIER_BASE = 1 << 3;
        const EMOJI_COMPONENT = 1 << 4;
        const EXTENDED_PICTOGRAPHIC = 1 << 5;
        const GRAPHEME_EXTEND = 1 << 6;
    }
}

impl PropertyFlags {
    /// Maps an emoji-data.txt property name to its flag bit.
    pub fn from_emoji_property(value: &str) -> Option<PropertyFlags> {
        Some(match value {
            "Emoji" => PropertyFlags::EMOJI,
            "Emoji_Presentation" => PropertyFlags::EMOJI_PRESENTATION,
            "Emoji_Modifier" => PropertyFlags::EMOJI_MODIFIER,
            "Emoji_Modifier_Base" => PropertyFlags::EMOJI_MODIFIER_BASE,
            "Emoji_Component" => PropertyFlags::EMOJI_COMPONENT,
            "Extended_Pictographic" => PropertyFlags::EXTENDED_PICTOGRAPHIC,
            _ => return None,
        })
    }
}

/// The full property record for one codepoint.
///
/// Structural equality over every field is what the table builder
/// deduplicates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodepointProperties {
    pub general_category: GeneralCategory,
    pub script: Script,
    pub east_asian_width: EastAsianWidth,
    pub grapheme_cluster_break: GraphemeClusterBreak,
    pub flags: PropertyFlags,
    pub emoji_segmentation_category: EmojiSegmentationCategory,
}

impl CodepointProperties {
    pub fn emoji(&self) -> bool {
        self.flags.contains(PropertyFlags::EMOJI)
    }

    pub fn emoji_presentation(&self) -> bool {
        self.flags.contains(PropertyFlags::EMOJI_PRESENTATION)
    }

    pub fn emoji_modifier(&self) -> bool {
        self.flags.contains(PropertyFlags::EMOJI_MODIFIER)
    }

    pub fn emoji_modifier_base(&self) -> bool {
        self.flags.contains(PropertyFlags::EMOJI_MODIFIER_BASE)
    }

    pub fn emoji_component(&self) -> bool {
        self.flags.contains(PropertyFlags::EMOJI_COMPONENT)
    }

    pub fn extended_pictographic(&self) -> bool {
        self.flags.contains(PropertyFlags::EXTENDED_PICTOGRAPHIC)
    }

    pub fn grapheme_extend(&self) -> bool {
        self.flags.contains(PropertyFlags::GRAPHEME_EXTEND)
    }

    /// Terminal column width of a codepoint with these properties: 2 for
    /// Wide and Fullwidth, 1 for everything else (Ambiguous counts as 1).
    pub fn column_width(&self) -> usize {
        match self.east_asian_width {
            EastAsianWidth::Wide | EastAsianWidth::Fullwidth => 2,
            _ => 1,
        }
    }
}

/// Derives the emoji segmentation category for a codepoint from its other
/// properties. Evaluated in priority order; the first match wins.
pub fn emoji_segmentation_category(
    codepoint: Codepoint,
    props: &CodepointProperties,
) -> EmojiSegmentationCategory {
    use EmojiSegmentationCategory as Category;

    if codepoint == 0x20E3 {
        return Category::CombiningEnclosingKeyCap;
    }
    if codepoint == 0x20E0 {
        return Category::CombiningEnclosingCircleBackslash;
    }
    if codepoint == 0x200D {
        return Category::ZWJ;
    }
    if codepoint == 0xFE0E {
        return Category::VS15;
    }
    if codepoint == 0xFE0F {
        return Category::VS16;
    }
    if codepoint == 0x1F3F4 {
        return Category::TagBase;
    }
    if (0xE0030..=0xE0039).contains(&codepoint) || (0xE0061..=0xE007A).contains(&codepoint) {
        return Category::TagSequence;
    }
    if codepoint == 0xE007F {
        return Category::TagTerm;
    }
    if props.emoji_modifier_base() {
        return Category::EmojiModifierBase;
    }
    if props.emoji_modifier() {
        return Category::EmojiModifier;
    }
    if props.grapheme_cluster_break == GraphemeClusterBreak::RegionalIndicator {
        return Category::RegionalIndicator;
    }
    if (0x30..=0x39).contains(&codepoint) || codepoint == u32::from(b'#') || codepoint == u32::from(b'*') {
        return Category::KeyCapBase;
    }
    if props.emoji_presentation() {
        return Category::EmojiEmojiPresentation;
    }
    if props.emoji() && !props.emoji_presentation() {
        return Category::EmojiTextPresentation;
    }
    if props.emoji() {
        return Category::Emoji;
    }

    Category::Invalid
}
