//! Media intake: document uploads, OCR, and speech-to-text.
//!
//! DESIGN
//! ======
//! All three are simulated. Uploads return metadata only (nothing is
//! stored), OCR picks a canned transcript from the MIME type and file name,
//! and speech-to-text returns a sample complaint in the requested language.

use serde::Serialize;

use super::case::now_millis;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("No files provided")]
    NoFiles,
    #[error("No audio provided")]
    NoAudio,
    #[error("Missing case ID")]
    MissingCaseId,
    #[error("invalid multipart body: {0}")]
    Multipart(String),
}

impl crate::error::ErrorCode for MediaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoFiles => "E_NO_FILES",
            Self::NoAudio => "E_NO_AUDIO",
            Self::MissingCaseId => "E_MISSING_CASE_ID",
            Self::Multipart(_) => "E_MULTIPART",
        }
    }
}

// =============================================================================
// UPLOADS
// =============================================================================

/// A file part received from a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    pub name: String,
    pub content_type: String,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedDocument {
    pub id: String,
    pub name: String,
    pub size: usize,
    #[serde(rename = "type")]
    pub content_type: String,
    pub url: String,
}

/// Describe accepted uploads for a case.
///
/// # Errors
///
/// Returns `MissingCaseId` for a blank case ID and `NoFiles` for an empty list.
pub fn register_uploads(case_id: &str, files: &[IncomingFile]) -> Result<Vec<UploadedDocument>, MediaError> {
    if case_id.trim().is_empty() {
        return Err(MediaError::MissingCaseId);
    }
    if files.is_empty() {
        return Err(MediaError::NoFiles);
    }

    let stamp = now_millis();
    Ok(files
        .iter()
        .enumerate()
        .map(|(index, file)| UploadedDocument {
            id: format!("file_{stamp}_{index}"),
            name: file.name.clone(),
            size: file.size,
            content_type: file.content_type.clone(),
            url: format!("/api/files/{case_id}/{}", file.name),
        })
        .collect())
}

// =============================================================================
// OCR
// =============================================================================

const EVICTION_NOTICE_TEXT: &str = "NOTICE OF EVICTION

Date: March 15, 2025

Dear Tenant,

This letter serves as formal notice that your tenancy will be terminated in 30 days due to non-payment of rent. You currently owe $1,200 for the months of January and February 2025.

Please vacate the premises by April 15, 2025.

Sincerely,
Property Management";

const WAGE_SLIP_TEXT: &str = "WAGE PAYMENT NOTICE

Employee: John Doe
Employee ID: EMP-2023-456
Period: January 1 - January 31, 2025

Base Salary: $3,000
Overtime: $450
Deductions: $320
Net Pay: $3,130

Payment Date: February 5, 2025";

const GENERIC_IMAGE_TEXT: &str = "LEGAL DOCUMENT

This document appears to contain legal text related to a case or agreement. The quality of the image makes it difficult to extract all details accurately.

Key points identified:
- Date: March 2025
- Parties involved: At least two individuals or entities
- Legal matter: Appears to be related to a dispute or agreement
- Contact information: Phone number and email visible
- Signature: Document appears to be signed";

const RENTAL_AGREEMENT_TEXT: &str = "RENTAL AGREEMENT

THIS AGREEMENT made on the 1st day of January, 2025, between Property Owner LLC (\"Landlord\") and Jane Smith (\"Tenant\").

1. PREMISES: Landlord rents to Tenant the residential property located at: 123 Main Street, Apt 4B, Anytown, State 12345.

2. TERM: The term of this Agreement shall be for one year, beginning on January 1, 2025, and ending on December 31, 2025.

3. RENT: Tenant agrees to pay monthly rent of $1,500, due on the 1st day of each month.

4. SECURITY DEPOSIT: Tenant has paid a security deposit of $1,500 to be held by Landlord.

5. UTILITIES: Tenant shall be responsible for payment of all utilities and services.

Signed,

Property Owner LLC                    Jane Smith
_________________                    _________________
Landlord                             Tenant";

const GENERIC_PDF_TEXT: &str = "LEGAL DOCUMENT

This PDF document contains multiple pages of legal text. The OCR system has identified the following key information:

Document Type: Legal filing or court document
Date: Recent (within last 3 months)
Case Number: Visible but partially illegible
Parties: Multiple individuals and possibly corporate entities
Subject Matter: Appears to be related to a legal dispute
Pages: Multiple (estimated 5-10 pages)

Note: For complete and accurate information, human review of the full document is recommended.";

const UNSUPPORTED_DOCUMENT_TEXT: &str = "DOCUMENT CONTENT

The system has attempted to extract text from this document, but the format may not be fully supported for automated extraction.

Detected content includes:
- Text paragraphs
- Possibly tables or structured data
- Some formatting may be lost

For best results, please consider uploading the document as a PDF or image file.";

/// Extract (simulated) text from the first uploaded document.
#[must_use]
pub fn extract_text(file_name: &str, content_type: &str) -> &'static str {
    let name = file_name.to_lowercase();

    if content_type.starts_with("image/") {
        if mentions(&name, &["eviction", "notice"]) {
            EVICTION_NOTICE_TEXT
        } else if mentions(&name, &["wage", "salary"]) {
            WAGE_SLIP_TEXT
        } else {
            GENERIC_IMAGE_TEXT
        }
    } else if content_type == "application/pdf" {
        if mentions(&name, &["contract", "agreement"]) { RENTAL_AGREEMENT_TEXT } else { GENERIC_PDF_TEXT }
    } else {
        UNSUPPORTED_DOCUMENT_TEXT
    }
}

fn mentions(name: &str, words: &[&str]) -> bool {
    words.iter().any(|w| name.contains(w))
}

// =============================================================================
// SPEECH
// =============================================================================

const TRANSCRIPTS: &[(&str, &str)] = &[
    (
        "hi",
        "मुझे पिछले हफ्ते मेरे मकान मालिक से बेदखली का नोटिस मिला। वे दावा करते हैं कि मैंने दो महीने का किराया नहीं दिया है, लेकिन मेरे पास रसीदें हैं जो दिखाती हैं कि मैंने समय पर भुगतान किया था। नोटिस में कहा गया है कि मुझे 15 अप्रैल तक जाना होगा। मुझे नहीं पता कि क्या करना है और मैं वकील का खर्च नहीं उठा सकता। क्या आप मुझे मेरे अधिकारों को समझने में मदद कर सकते हैं?",
    ),
    (
        "mr",
        "मला गेल्या आठवड्यात माझ्या मालकाकडून निष्कासन नोटीस मिळाली. ते म्हणतात की मी दोन महिन्यांचे भाडे दिलेले नाही, पण माझ्याकडे पावत्या आहेत ज्या दर्शवतात की मी वेळेवर पैसे दिले. नोटीसमध्ये म्हटले आहे की मला 15 एप्रिलपर्यंत जावे लागेल. मला माहित नाही काय करावे आणि मी वकिलाचा खर्च करू शकत नाही. तुम्ही मला माझे अधिकार समजण्यास मदत करू शकता का?",
    ),
    (
        "gu",
        "મને ગયા અઠવાડિયે મારા મકાનમાલિક તરફથી હકાલપટ્ટીની નોટિસ મળી. તેઓ દાવો કરે છે કે મેં બે મહિનાનું ભાડું ચૂકવ્યું નથી, પરંતુ મારી પાસે રસીદો છે જે બતાવે છે કે મેં સમયસર ચૂકવણી કરી હતી. નોટિસમાં કહેવામાં આવ્યું છે કે મારે 15 એપ્રિલ સુધીમાં જવું પડશે. મને ખબર નથી કે શું કરવું અને હું વકીલનો ખર્ચ ઉઠાવી શકતો નથી. શું તમે મને મારા અધિકારો સમજવામાં મદદ કરી શકો છો?",
    ),
    (
        "bn",
        "আমি গত সপ্তাহে আমার বাড়িওয়ালার কাছ থেকে উচ্ছেদের নোটিশ পেয়েছি। তারা দাবি করে যে আমি দুই মাসের ভাড়া দেইনি, কিন্তু আমার কাছে রসিদ আছে যা দেখায় যে আমি সময়মতো অর্থ প্রদান করেছি। নোটিশে বলা হয়েছে যে আমাকে ১৫ এপ্রিলের মধ্যে চলে যেতে হবে। আমি জানি না কী করব এবং আমি একজন আইনজীবীর খরচ বহন করতে পারি না। আপনি কি আমাকে আমার অধিকারগুলি বুঝতে সাহায্য করতে পারেন?",
    ),
    (
        "ta",
        "கடந்த வாரம் என் வீட்டு உரிமையாளரிடமிருந்து வெளியேற்ற அறிவிப்பைப் பெற்றேன். நான் இரண்டு மாத வாடகையைச் செலுத்தவில்லை என்று அவர்கள் கூறுகிறார்கள், ஆனால் நான் உரிய நேரத்தில் பணம் செலுத்தியதைக் காட்டும் ரசீதுகள் என்னிடம் உள்ளன. ஏப்ரல் 15 க்குள் நான் வெளியேற வேண்டும் என்று அறிவிப்பில் கூறப்பட்டுள்ளது. என்ன செய்வது என்று எனக்குத் தெரியவில்லை, மேலும் எனக்கு வழக்கறிஞரை அணுக பணம் இல்லை. என் உரிமைகளைப் புரிந்துகொள்ள நீங்கள் எனக்கு உதவ முடியுமா?",
    ),
];

const ENGLISH_TRANSCRIPT: &str = "I received an eviction notice from my landlord last week. They claim I haven't paid rent for two months, but I have receipts showing I paid on time. The notice says I need to leave by April 15th. I don't know what to do and I can't afford a lawyer. Can you help me understand my rights?";

/// Transcribe (simulated) audio. Unsupported languages fall back to English.
#[must_use]
pub fn transcribe(language: &str) -> &'static str {
    TRANSCRIPTS
        .iter()
        .find(|(code, _)| *code == language)
        .map_or(ENGLISH_TRANSCRIPT, |&(_, text)| text)
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
