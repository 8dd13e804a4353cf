//! Browser glue for the studio page.
//!
//! The page keeps no logic of its own beyond wiring events: gallery
//! fragments, the swap button and result regions all come rendered from the
//! server. Handlers receive the element they act on instead of reading a
//! global event.

pub const SCRIPT: &str = r##"
<script>
function switchTab(button) {
    const name = button.dataset.tab;
    document.querySelectorAll('.tab-content').forEach(tab => tab.classList.remove('active'));
    document.querySelectorAll('.tab-btn').forEach(btn => btn.classList.remove('active'));
    document.getElementById(name).classList.add('active');
    button.classList.add('active');
    history.replaceState(null, '', '/?tab=' + encodeURIComponent(name));
    if (name === 'templates') {
        loadTemplates();
    }
    return false;
}

function selectedTemplateId() {
    return document.getElementById('template-swap-template_id').value;
}

async function loadTemplates() {
    const gallery = document.getElementById('template-gallery');
    try {
        const response = await fetch('/gallery?selected=' + encodeURIComponent(selectedTemplateId()));
        gallery.innerHTML = await response.text();
    } catch (error) {
        gallery.innerHTML = '<p>Error loading templates</p>';
    }
}

function selectTemplate(item) {
    document.getElementById('template-swap-template_id').value = item.dataset.templateId;
    document.querySelectorAll('.template-item').forEach(el => el.classList.remove('selected'));
    item.classList.add('selected');
    checkSwapReady();
}

function previewFace(input) {
    const preview = document.getElementById('face-preview');
    const file = input.files[0];
    if (file) {
        const reader = new FileReader();
        reader.onload = (event) => {
            preview.innerHTML = '<img src="' + event.target.result + '" alt="Face preview">';
        };
        reader.readAsDataURL(file);
    } else {
        preview.innerHTML = '';
    }
    checkSwapReady();
}

async function checkSwapReady() {
    const face = document.getElementById('template-swap-face_image');
    const params = new URLSearchParams({
        template_id: selectedTemplateId(),
        face_chosen: face && face.files[0] ? 'true' : 'false'
    });
    try {
        const response = await fetch('/readiness?' + params.toString());
        document.getElementById('swap-btn-slot').innerHTML = await response.text();
    } catch (error) {
        document.getElementById('swap-btn').disabled = true;
    }
}

function showLoading(show) {
    document.getElementById('loading').classList.toggle('show', show);
}

function escapeHtml(text) {
    const div = document.createElement('div');
    div.textContent = text;
    return div.innerHTML;
}

async function submitFeature(form) {
    const slug = form.dataset.feature;
    const region = document.getElementById(slug + '-result');
    showLoading(true);
    try {
        const response = await fetch('/submit/' + slug, {
            method: 'POST',
            body: new FormData(form)
        });
        region.innerHTML = await response.text();
    } catch (error) {
        region.innerHTML = '<div class="error">❌ Error: ' + escapeHtml(error.message) + '</div>';
    } finally {
        showLoading(false);
    }
    return false;
}
</script>
"##;
