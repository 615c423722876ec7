//! Remediation advice for failing projects.
//!
//! One fixed paragraph per category, printed under `# RECOMMENDATIONS` for
//! each non-empty category of a non-compliant project.

use super::categories::{Categories, Category};
use crate::console_format::ReportWriter;
use std::io::{self, Write};

/// Fixed explanation and fix for one category.
pub fn advice_for(category: Category) -> &'static str {
    match category {
        Category::BadLicenses => {
            "Fix bad licenses: At least one license in the LICENSES directory and/or provided by \
             'SPDX-License-Identifier' tags is invalid. They are either not valid SPDX License \
             Identifiers or do not start with 'LicenseRef-'. FAQ about custom licenses: \
             https://reuse.software/faq/#custom-license"
        }
        Category::DeprecatedLicenses => {
            "Fix deprecated licenses: At least one of the licenses in the LICENSES directory and/or \
             provided by an 'SPDX-License-Identifier' tag has been deprecated by SPDX. The current \
             list and their respective recommended new identifiers can be found here: \
             <https://spdx.org/licenses/#deprecated>"
        }
        Category::LicensesWithoutExtension => {
            "Fix licenses without file extension: At least one license text file in the 'LICENSES' \
             directory does not have a '.txt' file extension. Please rename the file(s) accordingly."
        }
        Category::MissingLicenses => {
            "Fix missing licenses: For at least one of the license identifiers provided by the \
             'SPDX-License-Identifier' tags, there is no corresponding license text file in the \
             'LICENSES' directory. For SPDX license identifiers, you can download the license text \
             from the SPDX license list. For custom licenses (starting with 'LicenseRef-'), you \
             need to add these files yourself."
        }
        Category::UnusedLicenses => {
            "Fix unused licenses: At least one of the license text files in 'LICENSES' is not \
             referenced by any file, e.g. by an 'SPDX-License-Identifier' tag. Please make sure that \
             you either tag the accordingly licensed files properly, or delete the unused license \
             text if you are sure that no file or code snippet is licensed as such."
        }
        Category::ReadErrors => {
            "Fix read errors: At least one of the files in your directory cannot be read by the \
             tool. Please check the file permissions. You will find the affected files in the \
             READ ERRORS section of this report."
        }
        Category::MissingCopyrightOrLicensing => {
            "Fix missing copyright/licensing information: For one or more files, the tool cannot \
             find copyright and/or licensing information. You typically do this by adding \
             'SPDX-FileCopyrightText' and 'SPDX-License-Identifier' tags to each file. The \
             tutorial explains additional ways to do this: <https://reuse.software/tutorial/>"
        }
    }
}

/// Write the recommendations block. Writes nothing for a compliant project.
pub fn write_recommendations<W: Write>(categories: &Categories, writer: &mut ReportWriter<W>) -> io::Result<()> {
    if categories.is_compliant() {
        return Ok(());
    }

    writer.write_blank()?;
    writer.write_heading("RECOMMENDATIONS")?;
    for category in categories.active() {
        writer.write_wrapped_bullet(advice_for(category))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::categories::classify;
    use crate::types::ReportData;
    use std::path::PathBuf;

    fn render(data: &ReportData) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = ReportWriter::new(&mut buf);
            write_recommendations(&classify(data), &mut writer).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_nothing_for_compliant_project() {
        assert_eq!(render(&ReportData { file_total: 5, ..Default::default() }), "");
    }

    #[test]
    fn test_only_active_categories_advised_in_order() {
        let mut data = ReportData { file_total: 3, ..Default::default() };
        data.files_without_copyright.insert(PathBuf::from("a.py"));
        data.deprecated_licenses.insert("GPL-3.0".to_string());

        let out = render(&data);
        assert!(out.starts_with("\n# RECOMMENDATIONS\n\n* Fix deprecated licenses:"));

        let deprecated = out.find("* Fix deprecated licenses:").unwrap();
        let missing = out.find("* Fix missing copyright/licensing information:").unwrap();
        assert!(deprecated < missing);
        assert_eq!(out.matches("\n* Fix ").count(), 2);
    }

    #[test]
    fn test_every_category_has_distinct_advice() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::ALL {
            assert!(advice_for(category).starts_with("Fix "));
            assert!(seen.insert(advice_for(category)));
        }
    }
}
