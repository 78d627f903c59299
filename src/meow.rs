//! The `--meow` easter egg.

/// The resident cat, one row per line.
const FURBALL: [&str; 39] = [
    "            .';::::::::::::::::::::::::::::::::::::::::::::::::::;,..           ",
    "         .:dOKKKXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXKKOxc'         ",
    "       .ck0KXXNNNNNNXXNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNXKNNNNNNNXXKOo'       ",
    "      'd0KXXNNNNNWKc,;;cd0NWWWWWWWWWWWWWWWWWWWWWWWWWWWXkl;;;;kWNNNNNNXXKk;      ",
    "     .d0KXXNNNNWWWo.:x,.'.:kNMMMMMMMMMMMMMMMMMMMMMMWOl..''od.;XWWNNNNXXXKk,     ",
    "     ;kKXXXNNWWWMWc ;x;'l' .;xXMMMMMMMMMMMMMMMMMMWO:. .c;.do ,KMMWWNNXXXK0l.    ",
    "     ;kKXXXNNWMMMWc :x;';l:;;.;kWWX0OkkxxxkO0KNW0c.,;;cc',do.'0MMMWNNXXKK0l.    ",
    "     ;kKXXXNNWMMMWl ,d;cl;;c:;,.,,.'........'.',..;:c:;cl;lc ;XMMMWNNXXXK0l.    ",
    "     ;kKXXXNNWMMMMk..l:';c'c;;c'c;.co;cc,c:lo.'l,::,c,;c';l,.lWMMMWNNXXXK0l.    ",
    "     ;kKXXXNNWMMMMNc ;d:.ccc;;c,x:'ldclc;clld,,x:::;ccl';dc.'0MMMMWNNXXXK0l.    ",
    "     ;kKXXXNNWMMMMM0,.locc'l,:c.;l';c.cl,c,:l'c:.;c'l;:llo'.xWMMMMWNNXXXK0l.    ",
    "     ;kKXXXNNWMMMMMWo.ccloc;.'::.:c;:.cc,c,;ccc.,c,.'colcl';XMMMMMWNNXXXKOl.    ",
    "     ;kKXXXNNWMMMMWk..:ccol,lo.:;::;:.cc,c,;cc:,c'cd,:dccc'.lNMMMMWNNXXXKOl.    ",
    "     ;kKXXXNNWMMMMK,.::,co;.;:...,,,;,c;.c:;;;,.. ,c.'ll,;c'.xMMMMWNNXXXKOl.    ",
    "     ;kKXXXNNWMMMMd.,' 'lo:''.   '..:ol. :dc'..   .,,;lo;..;.;XMMMWNNXXXKOl.    ",
    "     ;kKXXXNNWMMMWc.;c,ox; ;o.  .oo.:o,...ll.,c   .dx..dx;;c.'0MMMWNNXXXKOl.    ",
    "     ;kKXXXNNWMMMWl.::.cxdc;lc'.,oc..:c'';l'.,oc'.;lc;oxo',c.,KMMMWNNXXXKOl.    ",
    "     ;kKXXNNNWMMMMx.':,,;;coccc:c'.,:,cc,c;;:..:c:cllc;;,,:;.lWMMMWNNXXXK0l.    ",
    "     ;kKXXXNNWMMMMNl.,c,.;oxko:::c;';;cl;c:;,,::::cxxdc..c:.;KMMMMWNNXXXK0l.    ",
    "     ;kKXXXNNWMMMMMXl',:::c::::cld0O,.:olc..d0xlc::::cc::;':0MMMMMWNNXXXKOl.    ",
    "     ;kKXXXNNWMMMMMMWx..col:,:lclkWWO:....,xNM0ocl:,:cll..lNMMMMMMWNNXXXKOl.    ",
    "     ;kKXXXNNWMMMMMMM0,;xl;;;;;:okXMMNo. ;XMMW0dc;;;;,cxc'xMMMMMMMWNNXXXKOl.    ",
    "     ;kKXXXNNWMMMMMMWx..lc.;,'c:,,:colcclclol:;':l,';';o' cNMMMMMMWNNXXXKOl.    ",
    "     ;OKXXXNNWMMMMMM0'':okclccc;';;.:x0NNXkl.,:';:cclcxdc'.dWMMMMMWNNXXXKOl.    ",
    "     ;OKXXXNNWMMMMMK;.,,,ccccc,;'.:;'.,;,;..,c'.;,clccl;,,..kWMMMMWNNXXXK0l.    ",
    "     ;kKXXXNNWMMMMNc.''';:cod'.cl..cl;:c,:;:l'.:l..ldcc:,''.,0MMMMWNNXXXX0l.    ",
    "     ;kKXXXNNWMMMMk.'oc::;:l;':o::::l::c,::cc:c:lc',c:;::co;.lWMMMWNNXXXK0l.    ",
    "     ;kKXXXNNWMMMWc :ko:dk:.'c:;.:l;;;l;.cc,;cl.':c: 'xkccko.,KMMMWNNXXXKOl.    ",
    "     ;OKXXXNNWMMMWc :l.,kd'.clcxcl:.;c:;,;cc.,lcdocl'.ckc.cl.'0MMMWNNXXXKOl.    ",
    "     ;kKXXXNNWMMMMd';'.;;'''cc;d;c;.l,;ddc'l;'l;oc;l,'',;,.;'cNMMMWNNXXXK0l.    ",
    "     ;kKXXXNNWMMMMXl.'ko:;ccc:...:l.:c'',':c':l...,lcc:;lk:.;0MMMMWNNXXXK0l.    ",
    "     ;kKXXXNNWWMMMMNo.;,;ccdoo,;d:''.:l;'cc'.';oc,codlc:,:':KMMMMMWNNXXXK0l.    ",
    "     ,xKXXXNNWWWMMMMW0l..':oco,.';':dclc;clol',,..lllc,..:kNMMMMMWWNNXXXKOc.    ",
    "     .lOKXXNNNNWWWMMMMWKxc;..,...::...cc,c,..;c.. ''.,:o0WMMMMWWWNNNNXXKKx'     ",
    "      .lOKXXNNNNNNNNNNNNNNXOxl:;','....'......,',:cokKNNNNNNNNNNNNNNNXK0d'      ",
    "        ,dOKXXXXXNNNXXNNNNNNNNNNK0OkxdddddddxkOKXNNNNNNNNNNNNNNNNNXXK0x:.       ",
    "         .,cdk00KKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKK000KKK0Oxl;.         ",
    "             ..'''''''''''''''''''''''''''''''''''''''''''''''''''.             ",
    "             Colorcat by Ben Gorlick (github: bgorlick) (c) 2024 | MIT     ",
];

/// Glyphs dense enough in the art to be rewoven from input characters.
const WEAVE_GLYPHS: [char; 13] = [
    'k', 'K', '0', 'X', 'N', 'W', 'M', 'c', 'd', 'l', 'x', 'o', 'O',
];

/// Trailer shown under a rewoven furball.
const WEAVE_TRAILER: &str =
    "      Look carefully at the furball you just created... meow it contains your code :)";

/// Render the furball, rewoven from the input when one is available.
pub fn furball(input: Option<&str>) -> String {
    let rows = match input {
        Some(text) if text.chars().any(char::is_alphanumeric) => weave(text),
        _ => FURBALL.iter().map(|row| (*row).to_string()).collect(),
    };
    let start = input.map_or(1, gradient_start);

    let mut output = String::from("\n");
    for row in &rows {
        let mut column = start;
        for ch in row.chars() {
            if ch == ' ' {
                output.push(' ');
                continue;
            }
            // Index 0 of each 32-color band is black; skip it.
            while column % 32 == 0 {
                column += 1;
            }
            output.push_str(&format!("\x1b[38;5;{}m{ch}\x1b[0m", column % 32));
            column += 1;
        }
        output.push('\n');
    }
    output.push('\n');
    output
}

/// Derive a gradient start column from the input bytes.
fn gradient_start(text: &str) -> usize {
    text.bytes().map(usize::from).sum::<usize>() % 255 + 1
}

/// Replace weave glyphs with the input's alphanumeric characters, cycling.
/// The attribution row stays untouched.
fn weave(text: &str) -> Vec<String> {
    let pool: Vec<char> = text.chars().filter(|ch| ch.is_alphanumeric()).collect();
    let mut cycle = pool.iter().copied().cycle();

    let last = FURBALL.len() - 1;
    let mut rows: Vec<String> = FURBALL
        .iter()
        .enumerate()
        .map(|(index, row)| {
            if index == last {
                return (*row).to_string();
            }
            row.chars()
                .map(|ch| {
                    if WEAVE_GLYPHS.contains(&ch) {
                        cycle.next().unwrap_or(ch)
                    } else {
                        ch
                    }
                })
                .collect()
        })
        .collect();
    rows.push(String::new());
    rows.push(WEAVE_TRAILER.to_string());
    rows
}

#[cfg(test)]
mod tests {
    use super::{FURBALL, furball, gradient_start, weave};

    /// Remove ANSI escape sequences for comparison.
    fn strip_escapes(text: &str) -> String {
        let mut output = String::new();
        let mut in_escape = false;
        for ch in text.chars() {
            if in_escape {
                if ch == 'm' {
                    in_escape = false;
                }
            } else if ch == '\x1b' {
                in_escape = true;
            } else {
                output.push(ch);
            }
        }
        output
    }

    #[test]
    fn plain_furball_keeps_art_shape() {
        let output = furball(None);
        let stripped = strip_escapes(&output);
        for row in FURBALL {
            assert!(stripped.contains(row.trim_end()), "missing row: {row}");
        }
    }

    #[test]
    fn weave_uses_input_characters() {
        let rows = weave("zz");
        assert!(rows.iter().any(|row| row.contains('z')));
    }

    #[test]
    fn weave_leaves_attribution_untouched() {
        let rows = weave("qqqq");
        assert!(rows.iter().any(|row| row.contains("Ben Gorlick")));
    }

    #[test]
    fn gradient_start_is_deterministic() {
        assert_eq!(gradient_start("abc"), gradient_start("abc"));
        let start = gradient_start("abc");
        assert!((1..=255).contains(&start));
    }

    #[test]
    fn output_contains_no_color_zero() {
        let output = furball(Some("fn main() {}"));
        assert!(!output.contains("\x1b[38;5;0m"));
    }
}
