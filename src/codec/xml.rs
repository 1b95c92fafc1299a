use quick_xml::Reader;
use quick_xml::events::Event;
use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};

use crate::codec::{EmployeeCodec, EmployeeRecord, Format, from_records, to_records};
use crate::error::CodecError;
use crate::model::Employee;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const ROOT: &str = "Employees";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "Employees", deny_unknown_fields)]
struct EmployeesDocument {
    #[serde(rename = "Employee", default)]
    employees: Vec<EmployeeRecord>,
}

/// `<Employees>` root with one `<Employee>` element per record.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlCodec;

fn encode_error(e: impl ToString) -> CodecError {
    CodecError::Encode {
        format: Format::Xml,
        message: e.to_string(),
    }
}

fn decode_error(e: impl ToString) -> CodecError {
    CodecError::Decode {
        format: Format::Xml,
        message: e.to_string(),
    }
}

/// Serde ignores the root element's name and anything after it, so the
/// outer shape is checked by walking the events first: exactly one root,
/// named `Employees`, with nothing but comments or whitespace around it.
fn check_outline(document: &str) -> Result<(), CodecError> {
    let mut reader = Reader::from_str(document);
    reader.trim_text(true);

    let mut depth = 0usize;
    let mut root_seen = false;

    loop {
        match reader.read_event().map_err(decode_error)? {
            Event::Eof => break,
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Text(text) if text.iter().all(u8::is_ascii_whitespace) => {}
            _ if depth == 0 && root_seen => {
                return Err(decode_error("unexpected content after the root element"));
            }
            Event::Start(start) => {
                if depth == 0 {
                    check_root(start.name().as_ref())?;
                    root_seen = true;
                }
                depth += 1;
            }
            Event::Empty(start) => {
                if depth == 0 {
                    check_root(start.name().as_ref())?;
                    root_seen = true;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {
                if depth == 0 {
                    return Err(decode_error("text outside the root element"));
                }
            }
        }
    }

    if !root_seen {
        return Err(decode_error("missing root element"));
    }
    if depth != 0 {
        return Err(decode_error("unclosed root element"));
    }
    Ok(())
}

fn check_root(name: &[u8]) -> Result<(), CodecError> {
    if name == ROOT.as_bytes() {
        return Ok(());
    }
    Err(decode_error(format!(
        "expected root element `{ROOT}`, found `{}`",
        String::from_utf8_lossy(name)
    )))
}

impl EmployeeCodec for XmlCodec {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn encode(&self, employees: &[Employee]) -> Result<String, CodecError> {
        let document = EmployeesDocument {
            employees: to_records(employees),
        };

        let mut buffer = String::new();
        buffer.push_str(DECLARATION);
        buffer.push('\n');

        let mut serializer = Serializer::new(&mut buffer);
        serializer.indent(' ', 2);
        document.serialize(serializer).map_err(encode_error)?;

        buffer.push('\n');
        Ok(buffer)
    }

    fn decode(&self, document: &str) -> Result<Vec<Employee>, CodecError> {
        check_outline(document)?;
        let parsed: EmployeesDocument = quick_xml::de::from_str(document).map_err(decode_error)?;
        from_records(parsed.employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PayModel;
    use rstest::rstest;

    const TWO_EMPLOYEES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Employees>
  <Employee>
    <Type>Fixed</Type>
    <Id>1</Id>
    <Position>Programmer</Position>
    <Surname>Ivanov</Surname>
    <Name>Ivan</Name>
    <Patronymic>Ivanovich</Patronymic>
    <Birthday>01.01.1990</Birthday>
    <Salary>76000</Salary>
  </Employee>
  <Employee>
    <Type>Hourly</Type>
    <Id>2</Id>
    <Position>Manager</Position>
    <Surname>Petrov</Surname>
    <Name>Petr</Name>
    <Patronymic>Petrovich</Patronymic>
    <Birthday>1985</Birthday>
    <Salary>42272</Salary>
  </Employee>
</Employees>
"#;

    #[test]
    fn encoded_document_has_declaration_and_root() {
        let employees = crate::codec::tests::sample_employees();

        let document = XmlCodec.encode(&employees).expect("encode");

        assert!(document.starts_with(DECLARATION));
        assert!(document.contains("<Employees>"));
        assert_eq!(document.matches("<Employee>").count(), employees.len());
        assert!(document.contains("<Type>Hourly</Type>"));
    }

    #[test]
    fn decodes_handwritten_document_in_order() {
        let employees = XmlCodec.decode(TWO_EMPLOYEES).expect("decode");

        let summary: Vec<_> = employees
            .iter()
            .map(|e| (e.pay_model, e.id, e.salary))
            .collect();
        assert_eq!(
            summary,
            [(PayModel::Fixed, 1, 76000.0), (PayModel::Hourly, 2, 42272.0)]
        );
    }

    #[test]
    fn decodes_empty_root() {
        assert!(XmlCodec.decode("<Employees/>").expect("decode").is_empty());
    }

    #[test]
    fn comments_around_the_root_are_allowed() {
        let document = format!("<!-- exported -->\n{TWO_EMPLOYEES}<!-- end -->\n");

        assert_eq!(XmlCodec.decode(&document).expect("decode").len(), 2);
    }

    #[test]
    fn encoded_document_passes_outline_check() {
        let document = XmlCodec
            .encode(&crate::codec::tests::sample_employees())
            .expect("encode");

        assert_eq!(check_outline(&document), Ok(()));
    }

    #[rstest]
    #[case::truncated(&TWO_EMPLOYEES[..200])]
    #[case::missing_salary(
        "<Employees><Employee><Type>Fixed</Type><Id>1</Id><Position>P</Position>\
         <Surname>S</Surname><Name>N</Name><Patronymic>P</Patronymic>\
         <Birthday>B</Birthday></Employee></Employees>"
    )]
    #[case::id_not_integer(
        "<Employees><Employee><Type>Fixed</Type><Id>one</Id><Position>P</Position>\
         <Surname>S</Surname><Name>N</Name><Patronymic>P</Patronymic>\
         <Birthday>B</Birthday><Salary>1</Salary></Employee></Employees>"
    )]
    #[case::not_xml("{\"Type\": \"Fixed\"}")]
    #[case::empty("")]
    fn malformed_documents_fail_to_decode(#[case] document: &str) {
        let err = XmlCodec.decode(document).expect_err("malformed");

        assert!(matches!(err, CodecError::Decode { format: Format::Xml, .. }));
    }

    #[rstest]
    #[case::foreign_document("<html><body>hello</body></html>".to_string())]
    #[case::renamed_root(TWO_EMPLOYEES.replace("Employees>", "Staff>"))]
    #[case::unknown_child("<Employees><Worker><Id>1</Id></Worker></Employees>".to_string())]
    #[case::unknown_record_field(
        TWO_EMPLOYEES.replace("<Id>2</Id>", "<Id>2</Id><Department>QA</Department>")
    )]
    #[case::trailing_element(format!("{TWO_EMPLOYEES}<Junk/>"))]
    #[case::trailing_unclosed(format!("{TWO_EMPLOYEES}<Junk>"))]
    #[case::trailing_text(format!("{TWO_EMPLOYEES}tail"))]
    #[case::second_root("<Employees/><Employees/>".to_string())]
    fn well_formed_xml_with_wrong_shape_fails_to_decode(#[case] document: String) {
        let err = XmlCodec.decode(&document).expect_err("wrong shape");

        assert!(matches!(err, CodecError::Decode { format: Format::Xml, .. }));
    }

    #[test]
    fn unknown_type_tag_fails_to_decode() {
        let document = TWO_EMPLOYEES.replace("<Type>Hourly</Type>", "<Type>Intern</Type>");

        let err = XmlCodec.decode(&document).expect_err("unknown tag");

        assert_eq!(err, CodecError::UnknownVariant("Intern".into()));
    }
}
