// src/languages.rs
use crate::errors::{PlaygroundError, Result};
use serde::Serialize;

/// A language the playground can run, with the runtime version requested
/// from the execution service and the starter code shown in the editor.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Language {
    pub language: &'static str,
    pub version: &'static str,
    pub snippet: &'static str,
}

pub static LANGUAGES: &[Language] = &[
    Language {
        language: "javascript",
        version: "18.15.0",
        snippet: "\nfunction greet(name) {\n\tconsole.log(\"Hello, \" + name + \"!\");\n}\n\ngreet(\"Alex\");\n",
    },
    Language {
        language: "typescript",
        version: "5.0.3",
        snippet: "\ntype Params = {\n\tname: string;\n}\n\nfunction greet(data: Params) {\n\tconsole.log(\"Hello, \" + data.name + \"!\");\n}\n\ngreet({ name: \"Alex\" });\n",
    },
    Language {
        language: "python",
        version: "3.10.0",
        snippet: "\ndef greet(name):\n\tprint(\"Hello, \" + name + \"!\")\n\ngreet(\"Alex\")\n",
    },
    Language {
        language: "java",
        version: "15.0.2",
        snippet: "\npublic class Main {\n\tpublic static void main(String[] args) {\n\t\tSystem.out.println(\"Hello World\");\n\t}\n}\n",
    },
    Language {
        language: "csharp",
        version: "6.12.0",
        snippet: "\nusing System;\n\nnamespace HelloWorld\n{\n\tclass Program\n\t{\n\t\tstatic void Main(string[] args)\n\t\t{\n\t\t\tConsole.WriteLine(\"Hello World!\");\n\t\t}\n\t}\n}\n",
    },
    Language {
        language: "php",
        version: "8.2.3",
        snippet: "<?php\n\n$name = 'Alex';\necho $name;\n",
    },
    Language {
        language: "c",
        version: "10.2.0",
        snippet: "\n#include <stdio.h>\n\nint main() {\n\tprintf(\"Hello World\");\n\treturn 0;\n}\n",
    },
    Language {
        language: "cpp",
        version: "10.2.0",
        snippet: "\n#include <iostream>\n\nint main() {\n\tstd::cout << \"Hello World\" << std::endl;\n\treturn 0;\n}\n",
    },
];

/// Looks up a language by its selector, ignoring case and surrounding whitespace.
pub fn find(name: &str) -> Result<&'static Language> {
    let wanted = name.trim().to_lowercase();
    LANGUAGES
        .iter()
        .find(|l| l.language == wanted)
        .ok_or_else(|| PlaygroundError::UnsupportedLanguage(name.trim().to_string()))
}
