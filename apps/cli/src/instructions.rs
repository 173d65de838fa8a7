//! Import instructions shipped with each export.

use drill_core::Dialect;

const CSV_INSTRUCTIONS: &str = "\
Anki Import Instructions
=======================

1. Copy all media files listed in 'media_files_needed.txt' into your Anki collection.media folder
   (Typically found at: %APPDATA%\\Anki2\\[User Profile]\\collection.media on Windows
   or ~/Library/Application Support/Anki2/[User Profile]/collection.media on Mac)

2. In Anki, select 'Import File' from the File menu

3. Select the 'anki_import.csv' file

4. In the import dialog, ensure:
   - 'Fields separated by: Comma' is selected
   - 'Allow HTML in fields' is CHECKED
   - Field mapping is correctly set (Front -> Front, Back -> Back, Tags -> Tags)
   - Choose your target deck

5. Click 'Import' to complete the process
";

const SLOTTED_INSTRUCTIONS: &str = "\
AnkiApp CSV Import Instructions
===============================

1. The 'ankiapp_import.csv' file has seven columns:
   Front, Back, Tags, Front Image, Back Image, Front Audio, Back Audio

2. Each side carries at most one image. Images referenced by the cards
   were copied into the 'media' folder next to the CSV.

3. In AnkiApp, choose 'Import' and select the CSV file, then add the
   files from the 'media' folder when asked for attachments.

4. Audio columns are always empty.
";

const XML_INSTRUCTIONS: &str = "\
# AnkiApp XML Import Instructions

## XML Format

- The deck, fields and cards structure follows the AnkiApp XML import format
- LaTeX equations are wrapped in <tex> tags
- Images are included as blobs whose ids are the SHA-256 hashes of the files

## Import Method

1. Use the anki_import.zip file for import
2. In AnkiApp, select \"Import\" and choose the ZIP file
3. AnkiApp processes the XML and the included images

## Troubleshooting

1. Verify XML structure: the log reports whether anki_import.xml is well-formed
2. Image references: blob ids in the XML must match the files under blobs/
3. Check preview.html to confirm LaTeX rendering and image display
4. See image_report_xml.txt for images that could not be found
";

/// File name and contents of the instructions for a dialect.
pub fn instructions(dialect: Dialect) -> (&'static str, &'static str) {
    match dialect {
        Dialect::TabularPlain => ("import_instructions.txt", CSV_INSTRUCTIONS),
        Dialect::TabularSlotted => ("ankiapp_instructions.txt", SLOTTED_INSTRUCTIONS),
        Dialect::TaggedMarkup => ("README.txt", XML_INSTRUCTIONS),
    }
}
