//! Vim script.

use scilex::KeywordCategory;
use scilex_vim::VIM_LEXER;

use crate::comment::CommentTokens;
use crate::language::Language;

/// Vim script, legacy and Vim9.
pub static VIM: Language = Language {
    name: "vim",
    display_name: "Vim Script",
    extensions: &["vim", "vimrc"],
    file_names: &[".vimrc", "_vimrc", ".gvimrc", "_gvimrc", ".exrc", "_exrc"],
    comments: CommentTokens::line("\""),
    lexer: &VIM_LEXER,
    keywords: KEYWORDS,
};

// Block words only fold when spelled `if`, `while`, `for`, `try`, `def`, `fun...` and
// `end...`, so the abbreviations `fu` and `en` are left out.
const KEYWORDS: &[(KeywordCategory, &str)] = &[
    (
        KeywordCategory::Keyword,
        "au augroup autocmd break call catch const continue def defer delfunction else elseif \
         enddef endfor endfunc endfunction endif endtry endwhile exe execute export final \
         finally finish for fun func function if import in is isnot let lockvar return throw \
         try unlet unlockvar var while",
    ),
    (
        KeywordCategory::Command,
        "cd colorscheme command echo echoerr echohl echomsg echon edit filetype hi highlight \
         imap inoremap map nmap nnoremap nohlsearch noremap normal onoremap packadd redraw \
         runtime set setglobal setlocal silent sleep source startinsert stopinsert syn syntax \
         vim9script vmap vnoremap wincmd xnoremap",
    ),
];
