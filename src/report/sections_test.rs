/// Tests for plain report sections
///
/// These tests pin the text of each section and check that section order and
/// item order never depend on snapshot insertion order.

#[cfg(test)]
mod tests {
    use crate::console_format::ReportWriter;
    use crate::report::categories::{Category, classify};
    use crate::report::sections::write_sections;
    use crate::types::ReportData;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn paths(items: &[&str]) -> HashSet<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    fn render(data: &ReportData) -> (String, Vec<Category>) {
        let mut buf = Vec::new();
        let written = {
            let mut writer = ReportWriter::new(&mut buf);
            write_sections(&classify(data), &mut writer).unwrap()
        };
        (String::from_utf8(buf).unwrap(), written)
    }

    #[test]
    fn test_no_sections_for_clean_snapshot() {
        let (out, written) = render(&ReportData { file_total: 5, ..Default::default() });
        assert_eq!(out, "");
        assert!(written.is_empty());
    }

    #[test]
    fn test_bad_licenses_lists_every_file_sorted() {
        let mut data = ReportData::default();
        data.bad_licenses.insert("Foo".to_string(), paths(&["src/z.py", "src/a.py"]));
        data.bad_licenses.insert("Bar".to_string(), paths(&["lib.rs"]));

        let (out, _) = render(&data);
        assert_eq!(
            out,
            "# BAD LICENSES\n\n\
             'Bar' found in:\n* lib.rs\n\n\
             'Foo' found in:\n* src/a.py\n* src/z.py\n\n\n"
        );
    }

    #[test]
    fn test_licenses_without_extension_lists_paths() {
        let mut data = ReportData::default();
        data.licenses_without_extension.insert("MIT".to_string(), PathBuf::from("LICENSES/MIT"));
        data.licenses_without_extension.insert("Apache-2.0".to_string(), PathBuf::from("LICENSES/Apache-2.0"));

        let (out, _) = render(&data);
        assert_eq!(
            out,
            "# LICENSES WITHOUT FILE EXTENSION\n\n\
             The following licenses have no file extension:\n\
             * LICENSES/Apache-2.0\n* LICENSES/MIT\n\n\n"
        );
    }

    #[test]
    fn test_licenses_sharing_a_path_are_all_listed() {
        let mut data = ReportData::default();
        data.licenses_without_extension.insert("MIT".to_string(), PathBuf::from("LICENSES/LICENSE"));
        data.licenses_without_extension.insert("Apache-2.0".to_string(), PathBuf::from("LICENSES/LICENSE"));

        let (out, _) = render(&data);
        assert_eq!(
            out,
            "# LICENSES WITHOUT FILE EXTENSION\n\n\
             The following licenses have no file extension:\n\
             * LICENSES/LICENSE\n* LICENSES/LICENSE\n\n\n"
        );
    }

    #[test]
    fn test_copyright_only_file_shown_under_copyright_heading() {
        let mut data = ReportData { file_total: 1, ..Default::default() };
        data.files_without_copyright.insert(PathBuf::from("a.py"));

        let (out, written) = render(&data);
        assert_eq!(written, vec![Category::MissingCopyrightOrLicensing]);
        assert_eq!(
            out,
            "# MISSING COPYRIGHT AND LICENSING INFORMATION\n\n\
             The following files have no copyright information:\n* a.py\n\n\n"
        );
        assert!(!out.contains("no copyright and licensing information"));
    }

    #[test]
    fn test_missing_info_groups_in_fixed_order() {
        let mut data = ReportData { file_total: 4, ..Default::default() };
        data.files_without_copyright = paths(&["a.py", "both.py"]);
        data.files_without_licenses = paths(&["both.py", "c.py"]);

        let (out, _) = render(&data);
        let both = out.find("no copyright and licensing information").unwrap();
        let copyright = out.find("no copyright information:").unwrap();
        let licensing = out.find("no licensing information:").unwrap();
        assert!(both < copyright && copyright < licensing);
        assert_eq!(out.matches("* both.py").count(), 1);
    }

    #[test]
    fn test_all_sections_in_declaration_order() {
        let mut data = ReportData { file_total: 10, ..Default::default() };
        data.read_errors.insert(PathBuf::from("locked.bin"));
        data.unused_licenses.insert("CC0-1.0".to_string());
        data.missing_licenses.insert("Apache-2.0".to_string(), paths(&["b.py"]));
        data.licenses_without_extension.insert("MIT".to_string(), PathBuf::from("LICENSES/MIT"));
        data.deprecated_licenses.insert("GPL-3.0".to_string());
        data.bad_licenses.insert("Foo".to_string(), paths(&["a.py"]));
        data.files_without_licenses.insert(PathBuf::from("c.py"));

        let (out, written) = render(&data);
        assert_eq!(written, Category::ALL.to_vec());

        let positions: Vec<usize> =
            Category::ALL.iter().map(|c| out.find(&format!("# {}\n", c.title())).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_output_independent_of_insertion_order() {
        let names = ["e.py", "b.py", "d.py", "a.py", "c.py"];

        let mut forward = ReportData { file_total: 5, ..Default::default() };
        let mut backward = forward.clone();
        for name in names {
            forward.read_errors.insert(PathBuf::from(name));
            forward.unused_licenses.insert(name.to_uppercase());
        }
        for name in names.iter().rev() {
            backward.read_errors.insert(PathBuf::from(name));
            backward.unused_licenses.insert(name.to_uppercase());
        }

        assert_eq!(render(&forward).0, render(&backward).0);
        assert!(render(&forward).0.contains("* a.py\n* b.py\n* c.py\n* d.py\n* e.py\n"));
    }
}
