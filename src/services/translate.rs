//! Translation: phrase-table lookup for the supported UI languages.
//!
//! DESIGN
//! ======
//! No external translation service is called. Known UI phrases map to fixed
//! translations; anything else is returned unchanged, which is also what the
//! front-end does when a translation request fails.

use serde::Serialize;

/// A language the assistant can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "mr", name: "Marathi" },
    Language { code: "gu", name: "Gujarati" },
    Language { code: "bn", name: "Bengali" },
    Language { code: "ta", name: "Tamil" },
];

/// Display name for a language code. Unknown codes are returned as given.
#[must_use]
pub fn language_name(code: &str) -> &str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.code == code)
        .map_or(code, |lang| lang.name)
}

/// (phrase, [(language, translation)]).
type PhraseEntry = (&'static str, &'static [(&'static str, &'static str)]);

const PHRASES: &[PhraseEntry] = &[
    (
        "Case Title",
        &[("hi", "केस का शीर्षक"), ("mr", "केस शीर्षक"), ("gu", "કેસ શીર્ષક"), ("bn", "কেস শিরোনাম"), ("ta", "வழக்கு தலைப்பு")],
    ),
    (
        "Case Type",
        &[("hi", "केस का प्रकार"), ("mr", "केस प्रकार"), ("gu", "કેસ પ્રકાર"), ("bn", "কেস প্রকার"), ("ta", "வழக்கு வகை")],
    ),
    (
        "Case Description",
        &[("hi", "केस का विवरण"), ("mr", "केस वर्णन"), ("gu", "કેસ વર્ણન"), ("bn", "কেস বিবরণ"), ("ta", "வழக்கு விளக்கம்")],
    ),
    (
        "Upload Documents",
        &[
            ("hi", "दस्तावेज़ अपलोड करें"),
            ("mr", "दस्तऐवज अपलोड करा"),
            ("gu", "દસ્તાવેજો અપલોડ કરો"),
            ("bn", "নথি আপলোড করুন"),
            ("ta", "ஆவணங்களை பதிவேற்றவும்"),
        ],
    ),
    (
        "Submit Case",
        &[
            ("hi", "केस जमा करें"),
            ("mr", "केस सबमिट करा"),
            ("gu", "કેસ સબમિટ કરો"),
            ("bn", "কেস জমা দিন"),
            ("ta", "வழக்கைச் சமர்ப்பிக்கவும்"),
        ],
    ),
    (
        "Processing...",
        &[
            ("hi", "प्रोसेसिंग..."),
            ("mr", "प्रक्रिया सुरू आहे..."),
            ("gu", "પ્રક્રિયા ચાલુ છે..."),
            ("bn", "প্রক্রিয়াকরণ হচ্ছে..."),
            ("ta", "செயலாக்கம்..."),
        ],
    ),
    (
        "Hello! I'm your AI legal assistant.",
        &[
            ("hi", "नमस्ते! मैं आपका AI कानूनी सहायक हूँ।"),
            ("mr", "नमस्कार! मी तुमचा AI कायदेशीर सहाय्यक आहे."),
            ("gu", "નમસ્તે! હું તમારો AI કાનૂની સહાયક છું."),
            ("bn", "হ্যালো! আমি আপনার AI আইনি সহকারী।"),
            ("ta", "வணக்கம்! நான் உங்கள் AI சட்ட உதவியாளர்."),
        ],
    ),
    (
        "What specific questions do you have?",
        &[
            ("hi", "आपके पास क्या विशिष्ट प्रश्न हैं?"),
            ("mr", "तुमच्याकडे कोणते विशिष्ट प्रश्न आहेत?"),
            ("gu", "તમારી પાસે કયા ચોક્કસ પ્રશ્નો છે?"),
            ("bn", "আপনার কি নির্দিষ্ট প্রশ্ন আছে?"),
            ("ta", "உங்களிடம் என்ன குறிப்பிட்ட கேள்விகள் உள்ளன?"),
        ],
    ),
];

/// Translate a known UI phrase, or return `text` unchanged.
#[must_use]
pub fn translate<'a>(text: &'a str, target_language: &str) -> &'a str {
    PHRASES
        .iter()
        .find(|(phrase, _)| *phrase == text)
        .and_then(|(_, translations)| translations.iter().find(|(lang, _)| *lang == target_language))
        .map_or(text, |&(_, translated)| translated)
}

#[cfg(test)]
#[path = "translate_test.rs"]
mod tests;
