use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src/instructions");
    println!("cargo:rerun-if-changed=src/error.rs");
    println!("cargo:rerun-if-changed=src/state");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("generated_program.rs");

    // Parse instruction files and extract metadata
    let instructions = extract_instruction_metadata();

    // Error type used for unknown discriminators
    let error_name = extract_error_name();

    // State structs mirrored as shank accounts
    let states = extract_state_metadata();

    let generated_code = generate_program_code(&instructions, error_name.as_deref(), &states);

    fs::write(&dest_path, &generated_code).unwrap();

    // Also write to src/generated.rs for shank IDL generation
    let src_generated_path = Path::new("src/generated.rs");
    let current = fs::read_to_string(src_generated_path).unwrap_or_default();
    if current != generated_code {
        fs::write(src_generated_path, &generated_code).unwrap();
    }

    println!(
        "cargo:rustc-env=GENERATED_PROGRAM_PATH={}",
        dest_path.display()
    );
}

#[derive(Debug)]
struct InstructionMeta {
    name: String,
    discriminator: u8,
    accounts: Vec<AccountMeta>,
    fields: Vec<FieldMeta>,
}

#[derive(Debug)]
struct AccountMeta {
    name: String,
    index: usize,
    desc: String,
    attrs: Vec<String>,
}

#[derive(Debug)]
struct FieldMeta {
    name: String,
    field_type: String,
}

#[derive(Debug)]
struct StateMeta {
    name: String,
    fields: Vec<FieldMeta>,
}

fn extract_instruction_metadata() -> Vec<InstructionMeta> {
    let mut instructions = Vec::new();

    let instruction_dir = Path::new("src/instructions");
    if instruction_dir.exists() {
        for entry in fs::read_dir(instruction_dir).unwrap() {
            let entry = entry.unwrap();
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) == Some("rs")
                && path.file_name().and_then(|s| s.to_str()) != Some("mod.rs")
            {
                if let Some(instruction) = parse_instruction_file(&path) {
                    instructions.push(instruction);
                }
            }
        }
    }

    instructions.sort_by_key(|i| i.discriminator);
    instructions
}

/// Text between the delimiter at `start` and its matching close, inclusive.
fn extract_delimited(content: &str, start: usize, open: char, close: char) -> String {
    let mut depth = 0;
    let mut inside = false;
    let mut body = String::new();

    for ch in content[start..].chars() {
        if ch == open {
            depth += 1;
            inside = true;
        } else if ch == close {
            depth -= 1;
        }

        if inside {
            body.push(ch);
        }

        if depth == 0 && inside {
            break;
        }
    }

    body
}

fn parse_instruction_file(path: &Path) -> Option<InstructionMeta> {
    let content = fs::read_to_string(path).ok()?;

    let start = content.find("define_instruction_with_metadata!(")?;
    let macro_content = extract_delimited(&content, start, '(', ')');

    parse_macro_content(&macro_content)
}

fn parse_macro_content(content: &str) -> Option<InstructionMeta> {
    let mut name = String::new();
    let mut discriminator = 0u8;
    let mut accounts = Vec::new();
    let mut fields = Vec::new();

    let mut in_accounts = false;
    let mut in_data = false;
    let mut account_index = 0;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with("discriminant:") {
            if let Some(num) = line.split(':').nth(1) {
                discriminator = num.trim().trim_end_matches(',').parse().unwrap_or(0);
            }
            continue;
        }

        // Instruction name is the first bare identifier after the discriminant
        if name.is_empty()
            && !line.is_empty()
            && !line.starts_with("define_instruction")
            && line.ends_with(',')
        {
            name = line.trim_end_matches(',').to_string();
            continue;
        }

        if line.starts_with("accounts:") {
            in_accounts = true;
            in_data = false;
            continue;
        } else if line.starts_with("data:") {
            in_accounts = false;
            in_data = true;
            continue;
        } else if line.starts_with("process:") {
            break;
        }

        if in_accounts && line.contains("desc:") {
            if let Some(account) = parse_account_line(line, account_index) {
                accounts.push(account);
                account_index += 1;
            }
        }

        if in_data && line.contains(':') && !line.starts_with('}') {
            if let Some(field) = parse_field_line(line) {
                fields.push(field);
            }
        }
    }

    if !name.is_empty() {
        Some(InstructionMeta {
            name,
            discriminator,
            accounts,
            fields,
        })
    } else {
        None
    }
}

fn parse_account_line(line: &str, index: usize) -> Option<AccountMeta> {
    // counter: deferred => signer => writable, desc: "New counter account",
    let parts: Vec<&str> = line.splitn(3, ':').collect();
    if parts.len() < 3 {
        return None;
    }

    let name = parts[0].trim().to_string();
    let account_def = parts[1].trim();
    let desc = parts[2].trim().trim_end_matches(',').trim_matches('"');

    let mut attrs = Vec::new();
    if account_def.contains("signer") {
        attrs.push("signer".to_string());
    }
    if account_def.contains("writable") {
        attrs.push("writable".to_string());
    }

    Some(AccountMeta {
        name,
        index,
        desc: desc.to_string(),
        attrs,
    })
}

fn parse_field_line(line: &str) -> Option<FieldMeta> {
    let line = line.trim_start_matches("pub ");
    let (name, field_type) = line.split_once(':')?;

    Some(FieldMeta {
        name: name.trim().to_string(),
        field_type: field_type.trim().trim_end_matches(',').to_string(),
    })
}

fn extract_error_name() -> Option<String> {
    let content = fs::read_to_string("src/error.rs").ok()?;
    let start = content.find("define_program_errors!")?;
    let rest = &content[start..];
    let enum_start = rest.find("pub enum ")? + "pub enum ".len();

    let name: String = rest[enum_start..]
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn extract_state_metadata() -> Vec<StateMeta> {
    let content = match fs::read_to_string("src/state/mod.rs") {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };
    let Some(start) = content.find("define_state!") else {
        return Vec::new();
    };
    let body = extract_delimited(&content, start, '{', '}');

    let mut states: Vec<StateMeta> = Vec::new();
    for line in body.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("pub struct ") {
            states.push(StateMeta {
                name: rest.trim_end_matches('{').trim().to_string(),
                fields: Vec::new(),
            });
        } else if line.starts_with("pub ") && line.contains(':') {
            if let (Some(state), Some(field)) = (states.last_mut(), parse_field_line(line)) {
                state.fields.push(field);
            }
        }
    }

    states
}

fn generate_program_code(
    instructions: &[InstructionMeta],
    error_name: Option<&str>,
    states: &[StateMeta],
) -> String {
    let mut code = String::new();

    code.push_str("// @generated by build.rs from src/instructions, src/error.rs and src/state.\n");
    code.push_str("// Do not edit by hand.\n\n");

    if instructions.is_empty() {
        code.push_str("// No instructions found - using fallback\n");
        code.push_str("pub enum ProgramInstructions {}\n\n");
        code.push_str("pub fn process_instruction(_program_id: &pinocchio::pubkey::Pubkey, _accounts: &[pinocchio::account_info::AccountInfo], _instruction_data: &[u8]) -> pinocchio::ProgramResult {\n");
        code.push_str("    Err(pinocchio::program_error::ProgramError::InvalidInstructionData)\n");
        code.push_str("}\n");
        return code;
    }

    code.push_str("use shank::ShankInstruction;\n\n");

    // Shank instruction enum
    code.push_str("#[repr(u8)]\n");
    code.push_str("#[derive(Clone, Debug, PartialEq, ShankInstruction)]\n");
    code.push_str("pub enum ProgramInstructions {\n");

    for instruction in instructions {
        for account in &instruction.accounts {
            code.push_str(&format!("    #[account({}", account.index));
            for attr in &account.attrs {
                code.push_str(&format!(", {attr}"));
            }
            code.push_str(&format!(
                ", name = \"{}\", desc = \"{}\")]\n",
                account.name, account.desc
            ));
        }

        code.push_str(&format!("    {} {{\n", instruction.name));
        for field in &instruction.fields {
            code.push_str(&format!("        {}: {},\n", field.name, field.field_type));
        }
        code.push_str("    },\n\n");
    }
    code.push_str("}\n\n");

    // ShankAccount mirrors of the state structs
    if !states.is_empty() {
        code.push_str("/// Account layouts for IDL generation\n");
        code.push_str("pub mod accounts {\n");
        for (i, state) in states.iter().enumerate() {
            if i > 0 {
                code.push('\n');
            }
            code.push_str("    #[repr(C)]\n");
            code.push_str("    #[derive(Clone, shank::ShankAccount)]\n");
            code.push_str(&format!("    pub struct {} {{\n", state.name));
            for field in &state.fields {
                code.push_str(&format!("        pub {}: {},\n", field.name, field.field_type));
            }
            code.push_str("    }\n");
        }
        code.push_str("}\n\n");
    }

    // Dispatch
    code.push_str("pub fn process_instruction(\n");
    code.push_str("    program_id: &pinocchio::pubkey::Pubkey,\n");
    code.push_str("    accounts: &[pinocchio::account_info::AccountInfo],\n");
    code.push_str("    instruction_data: &[u8],\n");
    code.push_str(") -> pinocchio::ProgramResult {\n");
    code.push_str("    if program_id != &crate::ID {\n");
    code.push_str(
        "        return Err(pinocchio::program_error::ProgramError::IncorrectProgramId);\n",
    );
    code.push_str("    }\n\n");
    code.push_str("    match instruction_data.first() {\n");

    for instruction in instructions {
        code.push_str(&format!(
            "        Some({}) => {{\n",
            instruction.discriminator
        ));
        code.push_str(&format!(
            "            pinocchio_log::log!(\"Instruction: {}\");\n",
            instruction.name
        ));
        code.push_str(&format!("            crate::instructions::{}Instruction::try_from((accounts, &instruction_data[1..]))?.process()\n", instruction.name));
        code.push_str("        }\n");
    }

    match error_name {
        Some(error) => code.push_str(&format!(
            "        _ => Err(crate::error::{error}::InvalidDiscriminator.into()),\n"
        )),
        None => code.push_str(
            "        _ => Err(pinocchio::program_error::ProgramError::InvalidInstructionData),\n",
        ),
    }
    code.push_str("    }\n");
    code.push_str("}\n");

    code
}
