//! Issue sections of the plain report.
//!
//! Each category has one renderer. Which sections appear is decided by a
//! single table of `(Category, renderer)` pairs walked in report order, so
//! a new category only needs a new table entry.

use super::categories::{Categories, Category};
use crate::console_format::ReportWriter;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

type SectionFn<W> = fn(&Categories, &mut ReportWriter<W>) -> io::Result<()>;

/// Write the section of every non-empty category, in report order.
///
/// Returns the categories that produced a section.
pub fn write_sections<W: Write>(categories: &Categories, writer: &mut ReportWriter<W>) -> io::Result<Vec<Category>> {
    let sections: [(Category, SectionFn<W>); 7] = [
        (Category::BadLicenses, write_bad_licenses),
        (Category::DeprecatedLicenses, write_deprecated_licenses),
        (Category::LicensesWithoutExtension, write_licenses_without_extension),
        (Category::MissingLicenses, write_missing_licenses),
        (Category::UnusedLicenses, write_unused_licenses),
        (Category::ReadErrors, write_read_errors),
        (Category::MissingCopyrightOrLicensing, write_missing_copyright_or_licensing),
    ];

    let mut written = Vec::new();
    for (category, render) in sections {
        if categories.is_empty_category(category) {
            continue;
        }

        writer.write_heading(category.title())?;
        render(categories, writer)?;
        // Extra blank line closes the section
        writer.write_blank()?;
        written.push(category);
    }

    Ok(written)
}

/// Lead-in line followed by one bullet per item and a blank line
fn write_list<'a, W, I>(writer: &mut ReportWriter<W>, lead: &str, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a String>,
{
    writer.write_line(lead)?;
    for item in items {
        writer.write_bullet(item)?;
    }
    writer.write_blank()
}

/// One `'<id>' found in:` block per license
fn write_license_files<W: Write>(
    writer: &mut ReportWriter<W>,
    licenses: &BTreeMap<String, BTreeSet<String>>,
) -> io::Result<()> {
    for (license, files) in licenses {
        write_list(writer, &format!("'{}' found in:", license), files)?;
    }
    Ok(())
}

fn write_bad_licenses<W: Write>(categories: &Categories, writer: &mut ReportWriter<W>) -> io::Result<()> {
    write_license_files(writer, &categories.bad_licenses)
}

fn write_deprecated_licenses<W: Write>(categories: &Categories, writer: &mut ReportWriter<W>) -> io::Result<()> {
    write_list(writer, "The following licenses are deprecated by SPDX:", &categories.deprecated_licenses)
}

fn write_licenses_without_extension<W: Write>(
    categories: &Categories,
    writer: &mut ReportWriter<W>,
) -> io::Result<()> {
    // Sorted by path, not by license id; ids sharing a path each keep a line
    let mut paths: Vec<&String> = categories.licenses_without_extension.values().collect();
    paths.sort();
    write_list(writer, "The following licenses have no file extension:", paths)
}

fn write_missing_licenses<W: Write>(categories: &Categories, writer: &mut ReportWriter<W>) -> io::Result<()> {
    write_license_files(writer, &categories.missing_licenses)
}

fn write_unused_licenses<W: Write>(categories: &Categories, writer: &mut ReportWriter<W>) -> io::Result<()> {
    write_list(writer, "The following licenses are not used:", &categories.unused_licenses)
}

fn write_read_errors<W: Write>(categories: &Categories, writer: &mut ReportWriter<W>) -> io::Result<()> {
    write_list(writer, "Could not read:", &categories.read_errors)
}

fn write_missing_copyright_or_licensing<W: Write>(
    categories: &Categories,
    writer: &mut ReportWriter<W>,
) -> io::Result<()> {
    let info = &categories.missing_info;
    let groups = [
        ("The following files have no copyright and licensing information:", &info.both),
        ("The following files have no copyright information:", &info.copyright_only),
        ("The following files have no licensing information:", &info.licensing_only),
    ];

    for (lead, files) in groups {
        if !files.is_empty() {
            write_list(writer, lead, files)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;
