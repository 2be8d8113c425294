//! Starter sources, written once and then owned by the user.

use kiln_core::{FileRules, GeneratedFile};

/// `src/index.ts`
pub struct SampleIndex;

impl GeneratedFile for SampleIndex {
    fn path(&self) -> &str {
        "src/index.ts"
    }

    fn rules(&self) -> FileRules {
        FileRules::sample()
    }

    fn render(&self) -> eyre::Result<String> {
        Ok(r#"export class Hello {
  public sayHello() {
    return 'hello, world!';
  }
}
"#
        .to_string())
    }
}

/// `test/hello.test.ts`
pub struct SampleTest;

impl GeneratedFile for SampleTest {
    fn path(&self) -> &str {
        "test/hello.test.ts"
    }

    fn rules(&self) -> FileRules {
        FileRules::sample()
    }

    fn render(&self) -> eyre::Result<String> {
        Ok(r#"import { Hello } from '../src';

test('hello', () => {
  expect(new Hello().sayHello()).toBe('hello, world!');
});
"#
        .to_string())
    }
}
